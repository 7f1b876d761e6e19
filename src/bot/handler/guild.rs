//! Guild event handler starting bulk reconciliation.
//!
//! The `guild_create` event fires when a guild becomes available to the bot:
//! - On bot startup for each guild the bot is already in
//! - When the bot joins a new guild
//! - When a guild becomes available after a Discord outage or reconnect
//!
//! Each occurrence starts a fresh bulk pass. Passes are idempotent, so repeated
//! announcements of the same guild only cost a member listing.

use dioxus_logger::tracing;
use serenity::all::Guild;

use crate::model::GuildInfo;
use crate::service::gateway::RoleGateway;
use crate::service::reconcile::Reconciler;

/// Handles the guild_create event by spawning a bulk reconciliation pass.
///
/// Returns immediately; the pass runs in its own task.
///
/// # Arguments
/// - `reconciler` - Reconciler bound to this event's Discord context
/// - `guild` - Guild data from Discord
/// - `_is_new` - Whether this is a new guild join (unused, required by event handler signature)
pub fn handle_guild_create<G>(reconciler: &Reconciler<G>, guild: Guild, _is_new: Option<bool>)
where
    G: RoleGateway + Clone + 'static,
{
    tracing::info!("Guild available: {} ({})", guild.name, guild.id);

    reconciler.on_guild_available(GuildInfo::from(&guild));
}
