use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::bot::command::presence;

/// Handles the interaction_create event by dispatching slash commands.
pub async fn handle_interaction_create(ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let result = match command.data.name.as_str() {
        presence::COMMAND_NAME => presence::run(&ctx, &command).await,
        other => {
            tracing::warn!("Received unknown command {}", other);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle command {}: {}", command.data.name, e);
    }
}
