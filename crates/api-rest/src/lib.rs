//! Basketball Player Registry REST API
//!
//! Axum-based HTTP surface for the player registry: CRUD endpoints over
//! players, request validation, request metrics and health checks.
//!
//! ## Architecture
//!
//! - **app**: Router assembly and middleware stack
//! - **routes**: HTTP route handlers and the OpenAPI document
//! - **middleware**: Request id, logging, metrics and panic handling
//! - **metrics**: Metrics recorder and the `/metrics` router
//! - **extractors**: Validating extractors for bodies, queries and ids
//! - **responses**: Success response types
//! - **error**: Error classification and conversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use basketball_api_rest::{create_app, metrics_router, ApiConfig, AppState, PrometheusRecorder};
//! use basketball_api_rest::state::AlwaysReady;
//! use basketball_application::{PlayerService, PlayerUseCase};
//! use basketball_testing::InMemoryPlayerRepository;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repository = Arc::new(InMemoryPlayerRepository::with_teams([1]));
//!     let service: Arc<dyn PlayerUseCase> = Arc::new(PlayerService::new(repository));
//!     let recorder = Arc::new(PrometheusRecorder::new()?);
//!
//!     let state = AppState::new(ApiConfig::default(), service, recorder.clone(), Arc::new(AlwaysReady));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, create_app(state)).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod metrics;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use metrics::{metrics_router, MetricsRecorder, PrometheusRecorder};
pub use state::{AppState, ReadinessProbe};
