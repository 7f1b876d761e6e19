//! Domain models for presence-to-role reconciliation.
//!
//! These types decouple the reconciliation engine from Serenity's gateway payloads.
//! Conversions from Serenity models live next to each type so handlers can hand the
//! engine plain values.

pub mod guild;
pub mod member;
pub mod role;
pub mod voice;

pub use guild::GuildInfo;
pub use member::{GuildMember, Occupancy};
pub use role::{RoleAction, TargetRole};
pub use voice::VoiceTransition;

#[cfg(test)]
mod test;
