//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. It fires again
//! after every full reconnect.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Set the bot's presence
//! - Register the status command in the development guild

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, GuildId, Ready};

use crate::bot::command::presence;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `presence` - Initial "playing" status text
/// - `dev_guild_id` - Guild to register the status command in, if any
pub async fn handle_ready(
    ctx: Context,
    ready: Ready,
    presence: &str,
    dev_guild_id: Option<GuildId>,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing(presence)));

    let Some(guild_id) = dev_guild_id else {
        return;
    };

    match guild_id
        .set_commands(&ctx.http, vec![presence::register()])
        .await
    {
        Ok(commands) => tracing::debug!(
            "Registered {} commands in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to register commands in guild {}: {:?}",
            guild_id,
            e
        ),
    }
}
