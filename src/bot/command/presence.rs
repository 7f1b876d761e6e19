//! `/changeplaying` command for changing the bot's status.
//!
//! Restricted through default member permissions to members who can manage the
//! guild. The new status applies to the whole bot and lasts until the next restart
//! or the next use of the command.

use dioxus_logger::tracing;
use serenity::all::{
    ActivityData, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage,
    Permissions, ResolvedValue,
};

use crate::error::AppError;

pub const COMMAND_NAME: &str = "changeplaying";

const STATUS_OPTION: &str = "status";
const TYPE_OPTION: &str = "type";

/// Kind of activity shown in the bot's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Listening,
    Watching,
    Competing,
    Custom,
}

impl ActivityKind {
    const ALL: [ActivityKind; 5] = [
        Self::Playing,
        Self::Listening,
        Self::Watching,
        Self::Competing,
        Self::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Listening => "listening",
            Self::Watching => "watching",
            Self::Competing => "competing",
            Self::Custom => "custom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn activity(self, status: &str) -> ActivityData {
        match self {
            Self::Playing => ActivityData::playing(status),
            Self::Listening => ActivityData::listening(status),
            Self::Watching => ActivityData::watching(status),
            Self::Competing => ActivityData::competing(status),
            Self::Custom => ActivityData::custom(status),
        }
    }
}

/// Parsed arguments of `/changeplaying`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceRequest {
    pub status: String,
    pub kind: ActivityKind,
}

impl PresenceRequest {
    /// Parses the command's string options.
    ///
    /// # Arguments
    /// - `options` - `(option_name, value)` pairs as submitted
    ///
    /// # Returns
    /// - `Ok(PresenceRequest)` - Status present; type defaults to playing
    /// - `Err(AppError::BadRequest)` - Status missing or blank, or unknown type
    pub fn from_options<'a, I>(options: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut status = None;
        let mut kind = ActivityKind::Playing;

        for (name, value) in options {
            match name {
                STATUS_OPTION => status = Some(value.trim().to_string()),
                TYPE_OPTION => {
                    kind = ActivityKind::parse(value).ok_or_else(|| {
                        AppError::BadRequest(format!("Unknown status type '{}'", value))
                    })?
                }
                _ => {}
            }
        }

        match status {
            Some(status) if !status.is_empty() => Ok(Self { status, kind }),
            _ => Err(AppError::BadRequest("A status is required".to_string())),
        }
    }
}

/// Builds the command definition registered with Discord.
pub fn register() -> CreateCommand {
    let kind_option = ActivityKind::ALL.into_iter().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            TYPE_OPTION,
            "The type of status to change to",
        ),
        |option, kind| option.add_string_choice(kind.as_str(), kind.as_str()),
    );

    CreateCommand::new(COMMAND_NAME)
        .description("Change the bot status")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                STATUS_OPTION,
                "The status to change to",
            )
            .required(true),
        )
        .add_option(kind_option)
}

/// Runs `/changeplaying`, updating the bot's activity and replying ephemerally.
///
/// Invalid input is reported back to the invoking user rather than treated as a
/// failure of the command.
///
/// # Returns
/// - `Ok(())` - A response was sent
/// - `Err(AppError)` - Discord rejected the response
pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let options = command.data.options();
    let pairs = options.iter().filter_map(|option| match option.value {
        ResolvedValue::String(value) => Some((option.name, value)),
        _ => None,
    });

    let reply = match PresenceRequest::from_options(pairs) {
        Ok(request) => {
            ctx.set_activity(Some(request.kind.activity(&request.status)));
            tracing::info!(
                "{} changed status to {} '{}'",
                command.user.name,
                request.kind.as_str(),
                request.status
            );
            format!("Status changed to {} {}", request.kind.as_str(), request.status)
        }
        Err(e) => e.to_string(),
    };

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(reply)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}
