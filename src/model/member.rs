//! Guild member state as seen by reconciliation.
//!
//! A `GuildMember` combines what Discord's member list reports (identity and held
//! roles) with whether the member is connected to any voice channel. Which channel
//! they sit in is irrelevant; only presence versus absence drives the role.

use serenity::all::{Member, RoleId, UserId, VoiceState};

use crate::model::role::RoleAction;

/// Whether a member is connected to any voice channel in the guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupancy {
    Absent,
    Present,
}

impl Occupancy {
    /// Derives occupancy from a voice state.
    ///
    /// A missing voice state and a voice state without a channel (Discord's
    /// disconnect payload) are both treated as absent.
    pub fn from_voice_state(state: Option<&VoiceState>) -> Self {
        match state.and_then(|s| s.channel_id) {
            Some(_) => Self::Present,
            None => Self::Absent,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Snapshot of a guild member used by bulk reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMember {
    pub user_id: UserId,
    pub display_name: String,
    pub roles: Vec<RoleId>,
    pub occupancy: Occupancy,
}

impl GuildMember {
    /// Builds a member snapshot from a Serenity member and its voice occupancy.
    ///
    /// The display name follows Discord's precedence: guild nickname, then global
    /// display name, then username.
    pub fn from_member(member: &Member, occupancy: Occupancy) -> Self {
        Self {
            user_id: member.user.id,
            display_name: member.display_name().to_string(),
            roles: member.roles.clone(),
            occupancy,
        }
    }

    pub fn holds(&self, role_id: RoleId) -> bool {
        self.roles.contains(&role_id)
    }

    /// Determines the mutation needed to make role membership match occupancy.
    ///
    /// # Returns
    /// - `Some(RoleAction::Grant)` - Member is in voice without the role
    /// - `Some(RoleAction::Revoke)` - Member is out of voice but holds the role
    /// - `None` - Member is already consistent
    pub fn required_action(&self, role_id: RoleId) -> Option<RoleAction> {
        match (self.occupancy.is_present(), self.holds(role_id)) {
            (true, false) => Some(RoleAction::Grant),
            (false, true) => Some(RoleAction::Revoke),
            _ => None,
        }
    }
}
