use dioxus_logger::tracing;
use std::future::Future;
use tokio::task::JoinHandle;

/// Spawns a fire-and-forget task whose abnormal termination is logged.
///
/// The work runs in its own task; a second, lightweight task awaits it and logs
/// if it panicked or was cancelled, so such failures never vanish silently. Event
/// handlers drop the returned handle; tests await it to observe completion.
///
/// # Arguments
/// - `description` - Human readable name of the work, used in the failure log
/// - `future` - The work to run
///
/// # Returns
/// - `JoinHandle<()>` - Completes once the work has finished, successfully or not
pub fn spawn_logged<F>(description: String, future: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let work = tokio::spawn(future);

    tokio::spawn(async move {
        if let Err(e) = work.await {
            tracing::error!("{} terminated abnormally: {}", description, e);
        }
    })
}
