use serenity::all::RoleId;
use std::fmt;

/// The role kept in sync with voice occupancy, as resolved in a specific guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRole {
    pub id: RoleId,
    pub name: String,
}

impl TargetRole {
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single role mutation against one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleAction {
    Grant,
    Revoke,
}

impl fmt::Display for RoleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grant => write!(f, "grant"),
            Self::Revoke => write!(f, "revoke"),
        }
    }
}
