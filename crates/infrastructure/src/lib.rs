//! Infrastructure layer for the basketball player registry
//!
//! This crate provides:
//! - Database access (PostgreSQL with sqlx)
//! - The Postgres implementation of the player repository port
//!
//! ## Usage
//!
//! ```rust,ignore
//! use basketball_infrastructure::{
//!     database::{DatabaseConfig, DatabasePool},
//!     repositories::PgPlayerRepository,
//! };
//!
//! // Initialize database pool
//! let db_config = DatabaseConfig::from_env()?;
//! let pool = DatabasePool::new(&db_config).await?;
//! pool.run_migrations().await?;
//!
//! // Create repository
//! let player_repo = PgPlayerRepository::new(pool.pool().clone());
//! ```

pub mod database;
pub mod repositories;

// Re-export commonly used types
pub use database::{DatabaseConfig, DatabasePool, HealthStatus};
pub use repositories::PgPlayerRepository;

// Re-export result and error types
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database errors from sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded migration failures
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be mapped onto the domain model
    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout errors
    #[error("Timeout: {0}")]
    Timeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration("DATABASE_URL not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: DATABASE_URL not set");
    }
}
