use serenity::all::{Guild, GuildId};

/// Identity of a guild that became available to the bot.
///
/// Only the id and name are carried forward into reconciliation; roles, members
/// and voice states are always re-read through the gateway so that a pass works on
/// the freshest data rather than the snapshot in the `GUILD_CREATE` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildInfo {
    pub id: GuildId,
    pub name: String,
}

impl GuildInfo {
    pub fn new(id: GuildId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<&Guild> for GuildInfo {
    fn from(guild: &Guild) -> Self {
        Self::new(guild.id, guild.name.clone())
    }
}
