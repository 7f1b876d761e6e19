//! Per-guild readiness gate.
//!
//! A guild starts out not ready. Voice transitions observed before its first bulk
//! reconciliation finishes are held back and handed to the caller for replay once
//! the guild is marked ready, so no event is acted on while a pass is still
//! establishing the baseline and none is lost either. Readiness is monotonic: a
//! guild re-announced after a reconnect stays ready throughout its new pass.

use dioxus_logger::tracing;
use serenity::all::GuildId;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::VoiceTransition;

/// Upper bound on transitions held back per guild while it is not ready.
///
/// Hit only when initialization stalls (e.g. the voice role is missing); the oldest
/// transitions are dropped first since later ones supersede them.
pub const MAX_DEFERRED_TRANSITIONS: usize = 1000;

enum GuildState {
    Pending {
        deferred: VecDeque<VoiceTransition>,
        dropped: usize,
    },
    Ready,
}

/// Outcome of offering a voice transition to the gate.
#[derive(Debug, PartialEq, Eq)]
pub enum Admission {
    /// Guild is ready; the transition should be processed now.
    Process(VoiceTransition),
    /// Guild is not ready; the transition was queued for replay.
    ///
    /// `queued` is the queue length including this transition, letting callers log
    /// the first deferral of a guild loudly and the rest quietly.
    Deferred { queued: usize },
}

/// Concurrency-safe map of guild id to readiness state.
///
/// Cloning is cheap and clones share the same map, so one gate is created at
/// startup and handed to every event.
#[derive(Clone, Default)]
pub struct ReadinessGate {
    guilds: Arc<RwLock<HashMap<GuildId, GuildState>>>,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the guild's first bulk reconciliation has finished.
    ///
    /// Guilds never seen before are not ready.
    pub async fn is_ready(&self, guild_id: GuildId) -> bool {
        matches!(
            self.guilds.read().await.get(&guild_id),
            Some(GuildState::Ready)
        )
    }

    /// Marks a guild ready.
    ///
    /// Idempotent: marking an already ready guild is a no-op.
    ///
    /// # Returns
    /// - Transitions deferred while the guild was not ready, oldest first; empty if
    ///   the guild was already ready
    pub async fn mark_ready(&self, guild_id: GuildId) -> Vec<VoiceTransition> {
        let mut guilds = self.guilds.write().await;

        match guilds.insert(guild_id, GuildState::Ready) {
            Some(GuildState::Pending { deferred, .. }) => deferred.into(),
            _ => Vec::new(),
        }
    }

    /// Offers a voice transition to the gate.
    ///
    /// The readiness check and the queueing happen under one write lock, so a
    /// transition can never slip between a concurrent `mark_ready` draining the
    /// queue and the guild flipping to ready.
    pub async fn admit(&self, transition: VoiceTransition) -> Admission {
        let mut guilds = self.guilds.write().await;

        let state = guilds
            .entry(transition.guild_id)
            .or_insert_with(|| GuildState::Pending {
                deferred: VecDeque::new(),
                dropped: 0,
            });

        match state {
            GuildState::Ready => Admission::Process(transition),
            GuildState::Pending { deferred, dropped } => {
                if deferred.len() >= MAX_DEFERRED_TRANSITIONS {
                    if let Some(oldest) = deferred.pop_front() {
                        *dropped += 1;
                        // Warn on the first drop only
                        if *dropped == 1 {
                            tracing::warn!(
                                "Deferred voice transitions full for guild {}, dropping oldest",
                                oldest.guild_id
                            );
                        } else {
                            tracing::debug!(
                                "Dropped deferred voice transition for {} in guild {} ({} dropped)",
                                oldest.display_name,
                                oldest.guild_id,
                                dropped
                            );
                        }
                    }
                }
                deferred.push_back(transition);
                Admission::Deferred {
                    queued: deferred.len(),
                }
            }
        }
    }

    /// Number of transitions currently held back for a guild.
    #[cfg(test)]
    pub async fn deferred_count(&self, guild_id: GuildId) -> usize {
        match self.guilds.read().await.get(&guild_id) {
            Some(GuildState::Pending { deferred, .. }) => deferred.len(),
            _ => 0,
        }
    }

    /// Number of deferred transitions dropped because the queue was full.
    #[cfg(test)]
    pub async fn dropped_count(&self, guild_id: GuildId) -> usize {
        match self.guilds.read().await.get(&guild_id) {
            Some(GuildState::Pending { dropped, .. }) => *dropped,
            _ => 0,
        }
    }
}
