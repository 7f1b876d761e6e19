//! Discord bot integration for voice role synchronization.
//!
//! This module connects the reconciliation engine to Discord through Serenity. The
//! bot keeps a configured role held by exactly the members connected to a voice
//! channel: a full pass runs whenever a guild becomes available, and single grants
//! or revokes follow each voice state change.
//!
//! Event handlers never wait on reconciliation; each event spawns its own task so
//! Serenity's dispatch loop keeps flowing.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events and populate the role cache
//! - `GUILD_VOICE_STATES` - Receive voice state updates and the initial voice states
//! - `GUILD_MEMBERS` - List all guild members during bulk reconciliation (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
