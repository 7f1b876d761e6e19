use serenity::all::{
    Context, EventHandler, Guild, GuildId, Interaction, Ready, RoleId, VoiceState,
};
use serenity::async_trait;

use crate::config::Config;
use crate::service::gateway::SerenityGateway;
use crate::service::readiness::ReadinessGate;
use crate::service::reconcile::Reconciler;

pub mod guild;
pub mod interaction;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub gate: ReadinessGate,
    pub voice_role_id: RoleId,
    pub dev_guild_id: Option<GuildId>,
    pub presence: String,
}

impl Handler {
    pub fn new(config: &Config) -> Self {
        Self {
            gate: ReadinessGate::new(),
            voice_role_id: config.voice_role_id,
            dev_guild_id: config.dev_guild_id,
            presence: config.presence.clone(),
        }
    }

    /// Builds a reconciler talking to Discord through this event's context.
    fn reconciler(&self, ctx: &Context) -> Reconciler<SerenityGateway> {
        Reconciler::new(
            SerenityGateway::from_context(ctx),
            self.gate.clone(),
            self.voice_role_id,
        )
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, &self.presence, self.dev_guild_id).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.reconciler(&ctx), guild, is_new);
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.reconciler(&ctx), old, new);
    }

    /// Called when a slash command is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(ctx, interaction).await;
    }
}
