//! Repository implementations for data persistence.
//!
//! PostgreSQL-backed implementations of the repository ports defined in the
//! application layer.

mod player_repository;

pub use player_repository::*;
