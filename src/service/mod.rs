//! Services backing the bot's event handlers.
//!
//! - `gateway` - Discord operations behind the `RoleGateway` trait
//! - `readiness` - Per-guild readiness gate
//! - `mutation` - Isolated role grant/revoke
//! - `reconcile` - Bulk and incremental reconciliation
//! - `task` - Fire-and-forget task spawning with failure logging

pub mod gateway;
pub mod mutation;
pub mod readiness;
pub mod reconcile;
pub mod task;

#[cfg(test)]
mod test;
