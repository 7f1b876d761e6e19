use serenity::all::{GuildId, RoleId, UserId};
use test_utils::serenity::{create_test_guild, create_test_member, create_test_voice_state};

use crate::model::{GuildInfo, GuildMember, Occupancy, RoleAction, VoiceTransition};

mod guild;
mod member;
