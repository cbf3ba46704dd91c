//! Application layer for the basketball player registry
//!
//! This crate sits between the HTTP layer and persistence. It defines the
//! repository port the infrastructure layer implements and the player use case
//! the controllers call.
//!
//! ## Modules
//!
//! - `context` - Per-operation correlation id and deadline
//! - `ports` - Repository traits implemented by infrastructure
//! - `services` - Use cases (PlayerService)

pub mod context;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use context::OperationContext;
pub use ports::PlayerRepositoryPort;
pub use services::{PlayerService, PlayerUseCase};
