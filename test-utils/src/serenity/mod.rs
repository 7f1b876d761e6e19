//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, Member, VoiceState) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_role};
//!
//! #[tokio::test]
//! async fn test_role_resolution() {
//!     // Guild with a "Voice" role and one member connected to channel 500
//!     let guild = create_test_guild(123456789, "Test Guild", &[(42, "Voice")], &[(7, 500)]);
//!
//!     // Standalone role
//!     let role = create_test_role(42, "Voice", 0x00FF00, 1);
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod guild;
pub mod member;
pub mod role;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use role::create_test_role;
pub use voice_state::create_test_voice_state;
