//! Slash commands registered by the bot.
//!
//! - `presence` - `/changeplaying`, lets server managers change the bot's status

pub mod presence;
