use serenity::all::{GuildId, RoleId};
use thiserror::Error;

/// Failures that abort a reconciliation pass before any member is visited.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// The guild is not present in the gateway cache.
    ///
    /// Occurs when a guild became unavailable again between its `GUILD_CREATE`
    /// and the start of the pass.
    #[error("Guild {0} is not available in the cache")]
    GuildUnavailable(GuildId),

    /// The configured voice role does not exist in the guild.
    ///
    /// Either the role was deleted or `VOICE_ROLE_ID` points at a role from a
    /// different guild.
    #[error("Role {role_id} not found in guild {guild_id}")]
    RoleNotFound { guild_id: GuildId, role_id: RoleId },
}
