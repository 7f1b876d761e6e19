//! Test factory for creating Serenity Guild objects.
//!
//! This module provides factory functions for creating mock Serenity `Guild` structs
//! for testing purposes. These factories create valid Guild objects by deserializing
//! JSON, simulating the payload of a `GUILD_CREATE` gateway event.

use serenity::all::Guild;

use crate::serenity::role::role_json;
use crate::serenity::voice_state::voice_state_json;

/// Creates a test Serenity Guild with roles and connected voice users.
///
/// Roles are created with default color and ascending positions. Each entry in
/// `voice_members` produces a voice state for that user connected to the given
/// channel, as Discord reports in the guild's `voice_states` list.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `roles` - `(role_id, role_name)` pairs available in the guild
/// - `voice_members` - `(user_id, channel_id)` pairs for users connected to voice
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild::create_test_guild;
///
/// // Guild with no roles and nobody in voice
/// let guild = create_test_guild(123456789, "Test Guild", &[], &[]);
///
/// // Guild with a voice role and user 7 sitting in channel 500
/// let guild = create_test_guild(123456789, "Test Guild", &[(42, "Voice")], &[(7, 500)]);
/// ```
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    roles: &[(u64, &str)],
    voice_members: &[(u64, u64)],
) -> Guild {
    let roles: Vec<_> = roles
        .iter()
        .enumerate()
        .map(|(position, (role_id, role_name))| role_json(*role_id, role_name, 0, position as i16))
        .collect();

    let voice_states: Vec<_> = voice_members
        .iter()
        .map(|(user_id, channel_id)| voice_state_json(guild_id, *user_id, Some(*channel_id)))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": voice_states,
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
