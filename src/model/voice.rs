use serenity::all::{GuildId, UserId, VoiceState};

use crate::model::member::Occupancy;
use crate::model::role::RoleAction;

/// A single observed change of a member's voice occupancy.
///
/// Built from a `VOICE_STATE_UPDATE` event. Channel-to-channel moves, mute and
/// deafen toggles also arrive as voice state updates; those carry the same
/// occupancy on both sides and classify as no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceTransition {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub display_name: String,
    pub before: Occupancy,
    pub after: Occupancy,
}

impl VoiceTransition {
    /// Builds a transition from the cached previous state and the new state.
    ///
    /// The previous state comes from Serenity's cache and is `None` when the user
    /// was not in voice (or the cache never saw them), which counts as absent.
    ///
    /// # Returns
    /// - `Some(VoiceTransition)` - The update belongs to a guild
    /// - `None` - The update has no guild (direct-message calls)
    pub fn from_update(old: Option<&VoiceState>, new: &VoiceState) -> Option<Self> {
        let guild_id = new.guild_id?;

        let display_name = new
            .member
            .as_ref()
            .map(|m| m.display_name().to_string())
            .unwrap_or_else(|| new.user_id.to_string());

        Some(Self {
            guild_id,
            user_id: new.user_id,
            display_name,
            before: Occupancy::from_voice_state(old),
            after: Occupancy::from_voice_state(Some(new)),
        })
    }

    /// Classifies the transition into the role mutation it calls for.
    pub fn action(&self) -> Option<RoleAction> {
        match (self.before, self.after) {
            (Occupancy::Absent, Occupancy::Present) => Some(RoleAction::Grant),
            (Occupancy::Present, Occupancy::Absent) => Some(RoleAction::Revoke),
            _ => None,
        }
    }
}
