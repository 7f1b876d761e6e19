use dioxus_logger::tracing;
use serenity::all::VoiceState;

use crate::model::VoiceTransition;
use crate::service::gateway::RoleGateway;
use crate::service::reconcile::Reconciler;

/// Handles the voice_state_update event by spawning incremental reconciliation.
///
/// `old` is taken from Serenity's cache before it applied the update, so it reflects
/// the member's previous voice channel, or `None` if they were not in voice.
pub fn handle_voice_state_update<G>(
    reconciler: &Reconciler<G>,
    old: Option<VoiceState>,
    new: VoiceState,
) where
    G: RoleGateway + Clone + 'static,
{
    let Some(transition) = VoiceTransition::from_update(old.as_ref(), &new) else {
        tracing::trace!("Ignoring voice state update outside a guild for {}", new.user_id);
        return;
    };

    reconciler.on_voice_state_changed(transition);
}
