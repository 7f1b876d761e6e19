//! Role mutation applier.
//!
//! Every grant or revoke issued by reconciliation goes through `RoleMutationApplier`,
//! which turns a failed platform call into a logged `MutationOutcome::Failed`. A
//! failure for one member therefore never stops work on the others. Failed mutations
//! are not retried; the next reconciliation touching the member re-derives the
//! desired state from its occupancy.

use dioxus_logger::tracing;
use serenity::all::{GuildId, RoleId, UserId};

use crate::model::RoleAction;
use crate::service::gateway::RoleGateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Failed,
}

pub struct RoleMutationApplier<'a, G> {
    gateway: &'a G,
}

impl<'a, G: RoleGateway> RoleMutationApplier<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Grants or revokes a role for one member.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member belongs to
    /// - `user_id` - Member to mutate
    /// - `display_name` - Member name used in log lines
    /// - `role_id` - Role to grant or revoke
    /// - `action` - Whether to grant or revoke
    ///
    /// # Returns
    /// - `MutationOutcome::Applied` - The platform accepted the call
    /// - `MutationOutcome::Failed` - The call failed; the cause has been logged
    pub async fn apply(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        display_name: &str,
        role_id: RoleId,
        action: RoleAction,
    ) -> MutationOutcome {
        let result = match action {
            RoleAction::Grant => self.gateway.grant_role(guild_id, user_id, role_id).await,
            RoleAction::Revoke => self.gateway.revoke_role(guild_id, user_id, role_id).await,
        };

        match result {
            Ok(()) => {
                match action {
                    RoleAction::Grant => tracing::info!(
                        "Added voice role {} to {} in guild {}",
                        role_id,
                        display_name,
                        guild_id
                    ),
                    RoleAction::Revoke => tracing::info!(
                        "Removed voice role {} from {} in guild {}",
                        role_id,
                        display_name,
                        guild_id
                    ),
                }
                MutationOutcome::Applied
            }
            Err(e) => {
                tracing::error!(
                    "Failed to {} voice role {} for {} ({}) in guild {}: {}",
                    action,
                    role_id,
                    display_name,
                    user_id,
                    guild_id,
                    e
                );
                MutationOutcome::Failed
            }
        }
    }
}
