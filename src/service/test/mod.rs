use serenity::all::{GuildId, RoleId, UserId};
use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::error::{reconcile::ReconcileError, AppError};
use crate::model::{GuildInfo, GuildMember, Occupancy, RoleAction, TargetRole, VoiceTransition};
use crate::service::gateway::RoleGateway;
use crate::service::readiness::ReadinessGate;
use crate::service::reconcile::Reconciler;

mod readiness;

const GUILD: u64 = 1000;
const VOICE_ROLE: u64 = 42;

/// A role call observed by the mock gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RoleCall {
    action: RoleAction,
    guild_id: GuildId,
    user_id: UserId,
    role_id: RoleId,
}

#[derive(Default)]
struct MockState {
    roles: HashMap<GuildId, TargetRole>,
    members: HashMap<GuildId, Vec<GuildMember>>,
    failing_fetches: HashSet<GuildId>,
    failing_users: HashSet<UserId>,
    calls: Vec<RoleCall>,
}

/// In-memory `RoleGateway` recording every role call.
///
/// Successful grants and revokes are reflected in the stored member list, so a
/// second bulk pass sees the result of the first one, as it would on Discord.
#[derive(Clone, Default)]
struct MockGateway {
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    fn new() -> Self {
        Self::default()
    }

    /// Adds a guild whose voice role exists, with the given members.
    fn with_guild(self, guild_id: u64, members: Vec<GuildMember>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let guild_id = GuildId::new(guild_id);
            state
                .roles
                .insert(guild_id, TargetRole::new(RoleId::new(VOICE_ROLE), "Voice"));
            state.members.insert(guild_id, members);
        }
        self
    }

    /// Adds a guild that does not have the voice role.
    fn with_guild_without_role(self, guild_id: u64, members: Vec<GuildMember>) -> Self {
        self.state
            .lock()
            .unwrap()
            .members
            .insert(GuildId::new(guild_id), members);
        self
    }

    fn failing_fetch(self, guild_id: u64) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_fetches
            .insert(GuildId::new(guild_id));
        self
    }

    fn failing_user(self, user_id: u64) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_users
            .insert(UserId::new(user_id));
        self
    }

    fn calls(&self) -> Vec<RoleCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn calls_for(&self, user_id: u64) -> Vec<RoleAction> {
        self.calls()
            .into_iter()
            .filter(|call| call.user_id == UserId::new(user_id))
            .map(|call| call.action)
            .collect()
    }

    fn members(&self, guild_id: u64) -> Vec<GuildMember> {
        self.state
            .lock()
            .unwrap()
            .members
            .get(&GuildId::new(guild_id))
            .cloned()
            .unwrap_or_default()
    }

    /// Changes a member's voice occupancy without producing an event.
    fn set_occupancy(&self, guild_id: u64, user_id: u64, occupancy: Occupancy) {
        let mut state = self.state.lock().unwrap();
        if let Some(members) = state.members.get_mut(&GuildId::new(guild_id)) {
            for member in members.iter_mut() {
                if member.user_id == UserId::new(user_id) {
                    member.occupancy = occupancy;
                }
            }
        }
    }

    fn record(
        &self,
        action: RoleAction,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RoleCall {
            action,
            guild_id,
            user_id,
            role_id,
        });

        if state.failing_users.contains(&user_id) {
            return Err(serenity::Error::Other("Missing Permissions").into());
        }

        if let Some(member) = state
            .members
            .get_mut(&guild_id)
            .and_then(|members| members.iter_mut().find(|m| m.user_id == user_id))
        {
            match action {
                RoleAction::Grant if !member.roles.contains(&role_id) => {
                    member.roles.push(role_id)
                }
                RoleAction::Revoke => member.roles.retain(|r| *r != role_id),
                _ => {}
            }
        }

        Ok(())
    }
}

#[async_trait]
impl RoleGateway for MockGateway {
    async fn resolve_role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<TargetRole, AppError> {
        let role = self
            .state
            .lock()
            .unwrap()
            .roles
            .get(&guild_id)
            .filter(|role| role.id == role_id)
            .cloned();

        role.ok_or_else(|| ReconcileError::RoleNotFound { guild_id, role_id }.into())
    }

    async fn fetch_all_members(&self, guild_id: GuildId) -> Result<Vec<GuildMember>, AppError> {
        let state = self.state.lock().unwrap();

        if state.failing_fetches.contains(&guild_id) {
            return Err(serenity::Error::Other("Gateway timeout").into());
        }

        state
            .members
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| ReconcileError::GuildUnavailable(guild_id).into())
    }

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.record(RoleAction::Grant, guild_id, user_id, role_id)
    }

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.record(RoleAction::Revoke, guild_id, user_id, role_id)
    }
}

fn member(user_id: u64, occupancy: Occupancy, holds_role: bool) -> GuildMember {
    GuildMember {
        user_id: UserId::new(user_id),
        display_name: format!("member-{}", user_id),
        roles: if holds_role {
            vec![RoleId::new(VOICE_ROLE)]
        } else {
            Vec::new()
        },
        occupancy,
    }
}

fn transition(guild_id: u64, user_id: u64, before: Occupancy, after: Occupancy) -> VoiceTransition {
    VoiceTransition {
        guild_id: GuildId::new(guild_id),
        user_id: UserId::new(user_id),
        display_name: format!("member-{}", user_id),
        before,
        after,
    }
}

fn guild(guild_id: u64) -> GuildInfo {
    GuildInfo::new(GuildId::new(guild_id), format!("guild-{}", guild_id))
}

fn reconciler(gateway: &MockGateway) -> (Reconciler<MockGateway>, ReadinessGate) {
    let gate = ReadinessGate::new();
    let reconciler = Reconciler::new(gateway.clone(), gate.clone(), RoleId::new(VOICE_ROLE));
    (reconciler, gate)
}

/// Whether every member's role membership matches their voice occupancy.
fn converged(members: &[GuildMember]) -> bool {
    members
        .iter()
        .all(|m| m.holds(RoleId::new(VOICE_ROLE)) == m.occupancy.is_present())
}
