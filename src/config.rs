use serenity::all::{GuildId, RoleId};
use std::num::NonZeroU64;

use crate::error::{config::ConfigError, AppError};

/// Presence shown until someone changes it with `/changeplaying`.
const DEFAULT_PRESENCE: &str = "TETO TETO TETO TETO TETO...";

pub struct Config {
    pub discord_bot_token: String,

    /// Role granted to members while they are connected to voice.
    pub voice_role_id: RoleId,

    /// Guild the status command is registered in; no registration when unset.
    pub dev_guild_id: Option<GuildId>,

    pub presence: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError)` - A required variable is missing or an id failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let voice_role_id = parse_snowflake("VOICE_ROLE_ID", &require("VOICE_ROLE_ID")?)?;

        // Blank values count as unset so a copied .env.example works as is
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let dev_guild_id = match optional("DEV_GUILD_ID") {
            Some(value) => Some(GuildId::from(parse_snowflake("DEV_GUILD_ID", &value)?)),
            None => None,
        };

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            voice_role_id: RoleId::from(voice_role_id),
            dev_guild_id,
            presence: optional("BOT_PRESENCE").unwrap_or_else(|| DEFAULT_PRESENCE.to_string()),
        })
    }
}

fn parse_snowflake(name: &str, value: &str) -> Result<NonZeroU64, ConfigError> {
    value
        .trim()
        .parse::<NonZeroU64>()
        .map_err(|source| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            source,
        })
}
