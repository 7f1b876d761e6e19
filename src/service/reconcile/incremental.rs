use dioxus_logger::tracing;

use crate::model::VoiceTransition;
use crate::service::gateway::RoleGateway;
use crate::service::mutation::{MutationOutcome, RoleMutationApplier};
use crate::service::readiness::Admission;
use crate::service::reconcile::Reconciler;

impl<G> Reconciler<G>
where
    G: RoleGateway + Clone + 'static,
{
    /// Handles one voice transition.
    ///
    /// Transitions for a guild that is not ready yet are deferred and replayed by the
    /// guild's bulk pass once it completes.
    ///
    /// # Returns
    /// - `Some(MutationOutcome)` - A grant or revoke was attempted
    /// - `None` - The transition was deferred or needed no mutation
    pub async fn handle_transition(&self, transition: VoiceTransition) -> Option<MutationOutcome> {
        let (guild_id, user_id) = (transition.guild_id, transition.user_id);

        match self.gate.admit(transition).await {
            Admission::Process(transition) => self.apply_transition(&transition).await,
            Admission::Deferred { queued } => {
                // Info on the first deferral of a guild only
                if queued == 1 {
                    tracing::info!(
                        "Voice state updated for {} while guild {} not initialized, deferring",
                        user_id,
                        guild_id
                    );
                } else {
                    tracing::debug!(
                        "Deferring voice state update for {} in guild {} ({} queued)",
                        user_id,
                        guild_id,
                        queued
                    );
                }
                None
            }
        }
    }

    /// Applies the role mutation a transition calls for.
    ///
    /// Joins grant and leaves revoke the role without checking current membership;
    /// the gateway's role calls are idempotent.
    pub(super) async fn apply_transition(
        &self,
        transition: &VoiceTransition,
    ) -> Option<MutationOutcome> {
        let Some(action) = transition.action() else {
            tracing::trace!(
                "Ignoring voice state update for {} without occupancy change",
                transition.display_name
            );
            return None;
        };

        tracing::debug!(
            "Voice occupancy of {} in guild {} changed: {:?} -> {:?}",
            transition.display_name,
            transition.guild_id,
            transition.before,
            transition.after
        );

        let outcome = RoleMutationApplier::new(&self.gateway)
            .apply(
                transition.guild_id,
                transition.user_id,
                &transition.display_name,
                self.role_id,
                action,
            )
            .await;

        Some(outcome)
    }
}
