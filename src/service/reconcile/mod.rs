//! Presence-to-role reconciliation.
//!
//! `Reconciler` keeps the configured voice role held by exactly the members who are
//! connected to voice. It runs a full pass over every member when a guild becomes
//! available (`bulk`) and applies single grants or revokes as voice state changes
//! arrive (`incremental`). The per-guild `ReadinessGate` keeps incremental changes
//! from acting before a guild's first full pass has finished.
//!
//! Both entry points spawn their work and return immediately so the gateway's event
//! dispatch is never held up. No ordering is enforced between concurrent tasks;
//! every mutation is idempotent and derived from current occupancy, so a stale
//! write only lasts until the next event for that member.

pub mod bulk;
pub mod incremental;

use dioxus_logger::tracing;
use serenity::all::RoleId;
use tokio::task::JoinHandle;

use crate::model::{GuildInfo, VoiceTransition};
use crate::service::gateway::RoleGateway;
use crate::service::readiness::ReadinessGate;
use crate::service::task::spawn_logged;

#[derive(Clone)]
pub struct Reconciler<G> {
    gateway: G,
    gate: ReadinessGate,
    role_id: RoleId,
}

impl<G> Reconciler<G>
where
    G: RoleGateway + Clone + 'static,
{
    pub fn new(gateway: G, gate: ReadinessGate, role_id: RoleId) -> Self {
        Self {
            gateway,
            gate,
            role_id,
        }
    }

    /// Starts a bulk reconciliation pass for a guild that became available.
    ///
    /// # Returns
    /// - `JoinHandle<()>` - Completes when the pass has finished; may be dropped
    pub fn on_guild_available(&self, guild: GuildInfo) -> JoinHandle<()> {
        let reconciler = self.clone();

        spawn_logged(
            format!("Bulk reconciliation for guild {}", guild.id),
            async move {
                match reconciler.reconcile_guild(&guild).await {
                    Ok(summary) => tracing::info!(
                        "Initialized guild {} ({}): {} granted, {} revoked, {} unchanged, {} failed",
                        guild.name,
                        guild.id,
                        summary.granted,
                        summary.revoked,
                        summary.unchanged,
                        summary.failed
                    ),
                    Err(e) => tracing::error!(
                        "Error initializing on guild {} ({}): {}",
                        guild.name,
                        guild.id,
                        e
                    ),
                }
            },
        )
    }

    /// Starts incremental reconciliation for a single voice transition.
    ///
    /// # Returns
    /// - `JoinHandle<()>` - Completes when the transition has been handled; may be dropped
    pub fn on_voice_state_changed(&self, transition: VoiceTransition) -> JoinHandle<()> {
        let reconciler = self.clone();

        spawn_logged(
            format!(
                "Voice reconciliation for {} in guild {}",
                transition.user_id, transition.guild_id
            ),
            async move {
                reconciler.handle_transition(transition).await;
            },
        )
    }
}
