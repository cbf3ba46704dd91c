//! HTTP route handlers.

pub mod health;
pub mod openapi;
pub mod players;

pub use health::routes as health_routes;
pub use openapi::{routes as openapi_routes, ApiDoc};
pub use players::routes as player_routes;
