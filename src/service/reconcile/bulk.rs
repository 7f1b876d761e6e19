//! Bulk reconciliation run when a guild becomes available.
//!
//! This fires on bot startup for each guild, when the bot joins a new guild, and when
//! a guild comes back after an outage or reconnect. Every pass is idempotent: members
//! whose role already matches their occupancy cause no call at all.

use dioxus_logger::tracing;

use crate::error::AppError;
use crate::model::{GuildInfo, RoleAction};
use crate::service::gateway::RoleGateway;
use crate::service::mutation::{MutationOutcome, RoleMutationApplier};
use crate::service::reconcile::Reconciler;

/// Counts of what a bulk pass did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BulkSummary {
    pub granted: usize,
    pub revoked: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl BulkSummary {
    /// Number of grant or revoke calls issued during the pass.
    pub fn mutations(&self) -> usize {
        self.granted + self.revoked + self.failed
    }
}

impl<G> Reconciler<G>
where
    G: RoleGateway + Clone + 'static,
{
    /// Brings the voice role of every member of a guild in line with voice occupancy.
    ///
    /// 1. Resolves the voice role; on failure the pass is aborted and the guild stays
    ///    not ready, keeping its deferred transitions for the next announcement.
    /// 2. Fetches the full member list; on failure no member is touched, but the guild
    ///    is still marked ready so incremental changes keep being applied.
    /// 3. Grants the role to members in voice without it and revokes it from members
    ///    out of voice holding it. Each call is isolated; failures are counted and
    ///    logged without stopping the pass.
    /// 4. Marks the guild ready and replays transitions deferred while it was not.
    ///
    /// # Returns
    /// - `Ok(BulkSummary)` - Every member was visited
    /// - `Err(AppError)` - Role resolution or member fetch failed
    pub async fn reconcile_guild(&self, guild: &GuildInfo) -> Result<BulkSummary, AppError> {
        tracing::info!("Initializing on guild: {} ({})", guild.name, guild.id);

        if self.gate.is_ready(guild.id).await {
            tracing::debug!(
                "Guild {} re-announced, voice changes keep applying during the new pass",
                guild.id
            );
        }

        let role = self.gateway.resolve_role(guild.id, self.role_id).await?;

        let members = match self.gateway.fetch_all_members(guild.id).await {
            Ok(members) => members,
            Err(e) => {
                self.finish_initialization(guild).await;
                return Err(e);
            }
        };

        tracing::debug!(
            "Reconciling {} members of guild {} against role {}",
            members.len(),
            guild.id,
            role.name
        );

        let applier = RoleMutationApplier::new(&self.gateway);
        let mut summary = BulkSummary::default();

        for member in &members {
            let Some(action) = member.required_action(role.id) else {
                summary.unchanged += 1;
                continue;
            };

            let outcome = applier
                .apply(guild.id, member.user_id, &member.display_name, role.id, action)
                .await;

            match (outcome, action) {
                (MutationOutcome::Applied, RoleAction::Grant) => summary.granted += 1,
                (MutationOutcome::Applied, RoleAction::Revoke) => summary.revoked += 1,
                (MutationOutcome::Failed, _) => summary.failed += 1,
            }
        }

        tracing::debug!(
            "Issued {} role calls for guild {}",
            summary.mutations(),
            guild.id
        );

        self.finish_initialization(guild).await;

        Ok(summary)
    }

    /// Marks the guild ready and applies any transitions deferred until now.
    async fn finish_initialization(&self, guild: &GuildInfo) {
        let deferred = self.gate.mark_ready(guild.id).await;

        if deferred.is_empty() {
            return;
        }

        tracing::info!(
            "Replaying {} voice transitions deferred during initialization of guild {}",
            deferred.len(),
            guild.id
        );

        for transition in &deferred {
            self.apply_transition(transition).await;
        }
    }
}
