//! Testing utilities for the basketball player registry
//!
//! This crate provides:
//! - Test fixtures for players with realistic data
//! - Builder patterns for custom test data
//! - An in-memory player repository honouring the repository contract
//! - Test database setup for Postgres-backed tests
//!
//! # Examples
//!
//! ```
//! use basketball_testing::{builders::*, fixtures::*};
//!
//! // Create a random valid player draft
//! let draft = create_test_draft();
//! assert!(draft.age >= 15);
//!
//! // Build a custom one
//! let draft = PlayerDraftBuilder::new()
//!     .with_name("John")
//!     .with_team(7)
//!     .build();
//! assert_eq!(draft.team_id.get(), 7);
//! ```

pub mod builders;
pub mod database;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
