use super::*;
use crate::service::readiness::{Admission, MAX_DEFERRED_TRANSITIONS};

/// Tests the initial state of an unseen guild.
///
/// Expected: Not ready
#[tokio::test]
async fn unseen_guild_is_not_ready() {
    let gate = ReadinessGate::new();

    assert!(!gate.is_ready(GuildId::new(GUILD)).await);
}

/// Tests that marking ready is idempotent and monotonic.
///
/// Expected: Ready after first mark, still ready after second, no transitions returned
#[tokio::test]
async fn mark_ready_is_idempotent() {
    let gate = ReadinessGate::new();
    let guild_id = GuildId::new(GUILD);

    assert!(gate.mark_ready(guild_id).await.is_empty());
    assert!(gate.is_ready(guild_id).await);

    assert!(gate.mark_ready(guild_id).await.is_empty());
    assert!(gate.is_ready(guild_id).await);
}

/// Tests admission before and after the guild becomes ready.
///
/// Expected: Deferred while not ready; returned oldest first on mark_ready;
/// processed afterwards
#[tokio::test]
async fn defers_until_ready_then_processes() {
    let gate = ReadinessGate::new();
    let guild_id = GuildId::new(GUILD);
    let join = transition(GUILD, 1, Occupancy::Absent, Occupancy::Present);
    let leave = transition(GUILD, 1, Occupancy::Present, Occupancy::Absent);

    assert_eq!(
        gate.admit(join.clone()).await,
        Admission::Deferred { queued: 1 }
    );
    assert_eq!(
        gate.admit(leave.clone()).await,
        Admission::Deferred { queued: 2 }
    );

    assert_eq!(gate.mark_ready(guild_id).await, vec![join.clone(), leave]);

    assert_eq!(gate.admit(join.clone()).await, Admission::Process(join));
}

/// Tests that the deferred queue is bounded.
///
/// Expected: Queue capped, overflow counted, oldest transitions dropped first
#[tokio::test]
async fn deferred_queue_is_bounded() {
    let gate = ReadinessGate::new();
    let guild_id = GuildId::new(GUILD);

    for user_id in 1..=(MAX_DEFERRED_TRANSITIONS as u64 + 5) {
        gate.admit(transition(GUILD, user_id, Occupancy::Absent, Occupancy::Present))
            .await;
    }

    assert_eq!(gate.deferred_count(guild_id).await, MAX_DEFERRED_TRANSITIONS);
    assert_eq!(gate.dropped_count(guild_id).await, 5);
    assert_eq!(
        gate.admit(transition(GUILD, 9999, Occupancy::Absent, Occupancy::Present))
            .await,
        Admission::Deferred {
            queued: MAX_DEFERRED_TRANSITIONS
        }
    );

    let deferred = gate.mark_ready(guild_id).await;
    assert_eq!(deferred[0].user_id, UserId::new(7));
}

/// Tests that clones share state and guilds are independent.
///
/// Expected: Ready visible through a clone; other guild unaffected
#[tokio::test]
async fn clones_share_state_per_guild() {
    let gate = ReadinessGate::new();
    let clone = gate.clone();

    clone.mark_ready(GuildId::new(GUILD)).await;

    assert!(gate.is_ready(GuildId::new(GUILD)).await);
    assert!(!gate.is_ready(GuildId::new(GUILD + 1)).await);
}

/// Tests concurrent admission racing with mark_ready.
///
/// Every transition must either be returned by mark_ready or be admitted for
/// processing afterwards; none may be lost.
///
/// Expected: Deferred plus processed equals the number admitted
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_admission_loses_nothing() {
    let gate = ReadinessGate::new();
    let guild_id = GuildId::new(GUILD);

    let mut handles = Vec::new();
    for user_id in 1..=200u64 {
        let gate = gate.clone();
        handles.push(tokio::spawn(async move {
            gate.admit(transition(GUILD, user_id, Occupancy::Absent, Occupancy::Present))
                .await
        }));
    }

    let replayed = gate.mark_ready(guild_id).await.len();

    let mut processed = 0;
    for handle in handles {
        if let Admission::Process(_) = handle.await.unwrap() {
            processed += 1;
        }
    }

    assert_eq!(replayed + processed, 200);
}
