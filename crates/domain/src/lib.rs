//! Basketball Registry Domain Types
//!
//! This crate provides the core domain model for the basketball player registry.
//! It defines the player entity, its identifiers and the error taxonomy shared by
//! every layer above it.
//!
//! ## Architecture
//!
//! - **identifiers**: Strongly-typed store-assigned identifiers
//! - **player**: The player entity, creation drafts and updates
//! - **errors**: The flat player error taxonomy
//!
//! ## Usage
//!
//! ```rust
//! use basketball_domain::{PlayerDraft, PlayerId, PlayerRole, TeamId};
//!
//! let draft = PlayerDraft {
//!     name: "John".to_string(),
//!     surname: "Doe".to_string(),
//!     age: 25,
//!     height: 1900,
//!     weight: 85000,
//!     citizenship: "USA".to_string(),
//!     role: PlayerRole::PointGuard,
//!     team_id: TeamId::new(1),
//! };
//!
//! let player = draft.into_player(PlayerId::new(1));
//! assert_eq!(player.role.as_str(), "PG");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
#[allow(missing_docs)]
pub mod player;

// Re-export commonly used types
pub use errors::{BoxError, PlayerError, PlayerResult};
pub use identifiers::*;
pub use player::{Player, PlayerDraft, PlayerRole, PlayerUpdate, UnknownRole};
