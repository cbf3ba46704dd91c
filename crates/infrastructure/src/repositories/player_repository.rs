//! Player repository implementation.
//!
//! PostgreSQL-backed implementation of [`PlayerRepositoryPort`]. Every
//! operation is a single parameterized statement.

use async_trait::async_trait;
use basketball_application::{OperationContext, PlayerRepositoryPort};
use basketball_common::PageRequest;
use basketball_domain::{
    Player, PlayerDraft, PlayerError, PlayerId, PlayerResult, PlayerRole, PlayerUpdate, TeamId,
};
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::{debug, instrument};

use crate::Error;

const PLAYER_COLUMNS: &str =
    "id, name, surname, age, height, weight, citizenship, role, team_id";

/// PostgreSQL implementation of PlayerRepositoryPort.
#[derive(Debug, Clone)]
pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    /// Create a new PostgreSQL player repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepositoryPort for PgPlayerRepository {
    #[instrument(skip(self, ctx, draft), fields(request_id = %ctx.request_id()))]
    async fn create(&self, ctx: &OperationContext, draft: &PlayerDraft) -> PlayerResult<Player> {
        let row = sqlx::query(
            r#"
            INSERT INTO players (
                name, surname, age, height, weight, citizenship, role, team_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.surname)
        .bind(draft.age)
        .bind(draft.height)
        .bind(draft.weight)
        .bind(&draft.citizenship)
        .bind(draft.role.as_str())
        .bind(draft.team_id.get())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify("create player", e))?;

        let id = PlayerId::new(
            row.try_get("id")
                .map_err(|e| PlayerError::internal("create player", Error::Database(e)))?,
        );

        debug!(player_id = %id, "Player created successfully");
        Ok(draft.clone().into_player(id))
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn get(&self, ctx: &OperationContext, id: PlayerId) -> PlayerResult<Player> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM players WHERE id = $1",
            PLAYER_COLUMNS
        ))
        .bind(id.get())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify("get player", e))?;

        row_to_player(&row).map_err(|e| PlayerError::internal("get player", e))
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn list(
        &self,
        ctx: &OperationContext,
        page_size: u64,
        page_number: u64,
    ) -> PlayerResult<Vec<Player>> {
        let page = PageRequest::new(page_size, page_number)?;

        let rows = sqlx::query(&format!(
            "SELECT {} FROM players LIMIT $1 OFFSET $2",
            PLAYER_COLUMNS
        ))
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify("list players", e))?;

        rows.iter()
            .map(row_to_player)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PlayerError::internal("list players", e))
    }

    #[instrument(skip(self, ctx, update), fields(request_id = %ctx.request_id()))]
    async fn update(
        &self,
        ctx: &OperationContext,
        id: PlayerId,
        update: &PlayerUpdate,
    ) -> PlayerResult<Player> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE players SET
                name = COALESCE($2, name),
                surname = COALESCE($3, surname),
                age = COALESCE($4, age),
                height = COALESCE($5, height),
                weight = COALESCE($6, weight),
                citizenship = COALESCE($7, citizenship),
                role = COALESCE($8, role),
                team_id = COALESCE($9, team_id)
            WHERE id = $1
            RETURNING {}
            "#,
            PLAYER_COLUMNS
        ))
        .bind(id.get())
        .bind(update.name.as_deref())
        .bind(update.surname.as_deref())
        .bind(update.age)
        .bind(update.height)
        .bind(update.weight)
        .bind(update.citizenship.as_deref())
        .bind(update.role.map(|role| role.as_str()))
        .bind(update.team_id.map(TeamId::get))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify("update player", e))?;

        debug!(player_id = %id, "Player updated successfully");
        row_to_player(&row).map_err(|e| PlayerError::internal("update player", e))
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn delete(&self, ctx: &OperationContext, id: PlayerId) -> PlayerResult<()> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| classify("delete player", e))?;

        if result.rows_affected() == 0 {
            return Err(PlayerError::NotFound);
        }

        debug!(player_id = %id, "Player deleted successfully");
        Ok(())
    }
}

/// Map a store failure onto the player error taxonomy.
///
/// Only "no rows" and a dangling team reference are classified.
fn classify(operation: &'static str, err: sqlx::Error) -> PlayerError {
    if matches!(err, sqlx::Error::RowNotFound) {
        return PlayerError::NotFound;
    }

    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return PlayerError::TeamNotFound;
        }
    }

    PlayerError::internal(operation, Error::Database(err))
}

/// Convert a database row to a Player.
fn row_to_player(row: &PgRow) -> Result<Player, Error> {
    let role: String = row.try_get("role")?;
    let role = role
        .parse::<PlayerRole>()
        .map_err(|e| Error::InvalidData(e.to_string()))?;

    Ok(Player {
        id: PlayerId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        surname: row.try_get("surname")?,
        age: row.try_get("age")?,
        height: row.try_get("height")?,
        weight: row.try_get("weight")?,
        citizenship: row.try_get("citizenship")?,
        role,
        team_id: TeamId::new(row.try_get("team_id")?),
    })
}
