//! Application Services
//!
//! Use cases the HTTP layer depends on.

mod player;

pub use player::*;
