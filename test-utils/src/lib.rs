//! Voicerole Test Utils
//!
//! Provides shared testing utilities for the voicerole bot. The bot keeps no local
//! state beyond its readiness map, so the only fixtures tests need are Serenity model
//! objects shaped the way Discord's gateway and HTTP API deliver them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_voice_state};
//!
//! #[tokio::test]
//! async fn test_occupancy() {
//!     let member = create_test_member(1, 10, "alice", None, &[]);
//!     let state = create_test_voice_state(1, 10, Some(500));
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
