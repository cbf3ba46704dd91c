//! Common utilities shared by the basketball registry services.
//!
//! This crate provides:
//! - Configuration management
//! - Telemetry (structured logging)
//! - Pagination helpers

pub mod config;
pub mod pagination;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, HttpConfig, MetricsConfig, PostgresConfig, TelemetryConfig};
pub use pagination::{PageRequest, PaginationError, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
