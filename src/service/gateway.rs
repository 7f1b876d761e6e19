//! Outbound operations the reconciliation engine needs from Discord.
//!
//! `RoleGateway` is the seam between the engine and Serenity. The production
//! implementation, `SerenityGateway`, reads roles and voice states from the gateway
//! cache and talks to the HTTP API for member listing and role changes.

use dioxus_logger::tracing;
use serenity::all::{Cache, Context, GuildId, Member, Role, RoleId, UserId, VoiceState};
use serenity::async_trait;
use serenity::http::Http;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::{reconcile::ReconcileError, AppError};
use crate::model::{GuildMember, Occupancy, TargetRole};

/// Maximum number of members to fetch per API request.
///
/// Discord's API supports up to 1000 members per request. Using the maximum
/// reduces the number of API calls needed for large guilds.
static MEMBERS_PER_REQUEST: u64 = 1000;

static GRANT_REASON: &str = "Member joined a voice channel";
static REVOKE_REASON: &str = "Member left voice channels";

/// Discord operations used by reconciliation.
///
/// # Contract
///
/// `grant_role` and `revoke_role` must be idempotent: granting a role the member
/// already holds, or revoking one they do not hold, succeeds without side effects.
/// Incremental reconciliation issues these calls without checking current role
/// membership, and duplicate or reordered voice events rely on this to be harmless.
/// Discord's member role endpoints (`PUT`/`DELETE /guilds/{g}/members/{u}/roles/{r}`)
/// satisfy it.
#[async_trait]
pub trait RoleGateway: Send + Sync {
    /// Looks up the target role in a guild.
    async fn resolve_role(&self, guild_id: GuildId, role_id: RoleId)
        -> Result<TargetRole, AppError>;

    /// Fetches every member of a guild together with their voice occupancy.
    ///
    /// Pagination is handled here; callers see a single list.
    async fn fetch_all_members(&self, guild_id: GuildId) -> Result<Vec<GuildMember>, AppError>;

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;
}

/// `RoleGateway` backed by a Serenity HTTP client and gateway cache.
///
/// Both handles are reference counted, so a gateway is built per event from the
/// event's `Context` at no real cost.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }

    /// Reads the set of users currently connected to voice from the cache.
    ///
    /// Kept synchronous so the cache guard is never held across an await.
    fn cached_voice_occupants(&self, guild_id: GuildId) -> Result<HashSet<UserId>, AppError> {
        let guild = self
            .cache
            .guild(guild_id)
            .ok_or(ReconcileError::GuildUnavailable(guild_id))?;

        Ok(voice_occupants(&guild.voice_states))
    }
}

#[async_trait]
impl RoleGateway for SerenityGateway {
    async fn resolve_role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<TargetRole, AppError> {
        let guild = self
            .cache
            .guild(guild_id)
            .ok_or(ReconcileError::GuildUnavailable(guild_id))?;

        Ok(resolve_target_role(&guild.roles, guild_id, role_id)?)
    }

    async fn fetch_all_members(&self, guild_id: GuildId) -> Result<Vec<GuildMember>, AppError> {
        let mut all_members: Vec<Member> = Vec::new();
        let mut after: Option<u64> = None;

        loop {
            let members = self
                .http
                .get_guild_members(guild_id, Some(MEMBERS_PER_REQUEST), after)
                .await?;

            if members.is_empty() {
                break;
            }

            tracing::debug!(
                "Fetched {} members from Discord API for guild {} (total so far: {})",
                members.len(),
                guild_id,
                all_members.len() + members.len()
            );

            // Set up pagination for next iteration
            after = members.last().map(|m| m.user.id.get());

            let fetched_count = members.len();
            all_members.extend(members);

            // If we got less than the maximum, we've reached the end
            if fetched_count < MEMBERS_PER_REQUEST as usize {
                break;
            }
        }

        // Occupancy is read after the member list so it is as fresh as possible
        let occupants = self.cached_voice_occupants(guild_id)?;

        Ok(to_guild_members(&all_members, &occupants))
    }

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(GRANT_REASON))
            .await?;
        Ok(())
    }

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, Some(REVOKE_REASON))
            .await?;
        Ok(())
    }
}

/// Finds the target role among a guild's roles.
///
/// # Returns
/// - `Ok(TargetRole)` - Role exists in the guild
/// - `Err(ReconcileError::RoleNotFound)` - No role with that id in the guild
pub fn resolve_target_role(
    roles: &HashMap<RoleId, Role>,
    guild_id: GuildId,
    role_id: RoleId,
) -> Result<TargetRole, ReconcileError> {
    roles
        .get(&role_id)
        .map(|role| TargetRole::new(role.id, role.name.clone()))
        .ok_or(ReconcileError::RoleNotFound { guild_id, role_id })
}

/// Collects the users connected to a voice channel from a guild's voice states.
pub fn voice_occupants(voice_states: &HashMap<UserId, VoiceState>) -> HashSet<UserId> {
    voice_states
        .iter()
        .filter(|(_, state)| state.channel_id.is_some())
        .map(|(user_id, _)| *user_id)
        .collect()
}

/// Combines fetched members with the set of users in voice.
pub fn to_guild_members(members: &[Member], occupants: &HashSet<UserId>) -> Vec<GuildMember> {
    members
        .iter()
        .map(|member| {
            let occupancy = if occupants.contains(&member.user.id) {
                Occupancy::Present
            } else {
                Occupancy::Absent
            };
            GuildMember::from_member(member, occupancy)
        })
        .collect()
}
