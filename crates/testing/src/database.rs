//! Test database setup.
//!
//! Provides a migrated PostgreSQL database for integration tests. Tests using
//! it are `#[ignore]`d and read `DATABASE_URL`.

use anyhow::Context;
use basketball_domain::TeamId;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

/// Test database wrapper
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect using `DATABASE_URL`
    pub async fn from_env() -> anyhow::Result<Self> {
        let url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Self::new_with_url(&url).await
    }

    /// Connect and apply the workspace migrations
    pub async fn new_with_url(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await
            .context("Failed to connect to test database")?;

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self { pool })
    }

    /// Get a reference to the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Clean all tables and reset the id sequences
    pub async fn clean(&self) -> anyhow::Result<()> {
        sqlx::query("TRUNCATE TABLE players, teams RESTART IDENTITY CASCADE")
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Insert a team and return its id
    pub async fn insert_team(&self, name: &str) -> anyhow::Result<TeamId> {
        let row = sqlx::query("INSERT INTO teams (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(self.pool())
            .await?;
        Ok(TeamId::new(row.get("id")))
    }
}
