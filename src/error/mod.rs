//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Nothing
//! in the event path propagates errors to Discord: handlers log them at the point of
//! failure, so the hierarchy exists for `?` ergonomics and readable log lines.

pub mod config;
pub mod reconcile;

use thiserror::Error;

use crate::error::{config::ConfigError, reconcile::ReconcileError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Reconciliation could not start for a guild.
    #[error(transparent)]
    ReconcileErr(#[from] ReconcileError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Invalid command input.
    ///
    /// The message is shown to the user who issued the command.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
