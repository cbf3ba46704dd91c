//! Player endpoints.

use crate::{
    error::ApiResult,
    extractors::{PlayerIdPath, RequestContext, ValidatedJson, ValidatedQuery},
    responses::{Created, NoContent},
    state::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use basketball_common::{PageRequest, PaginationError};
use basketball_domain::{Player, PlayerDraft, PlayerError, PlayerRole, PlayerUpdate, TeamId};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Player representation returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub age: i32,
    /// Height in millimetres
    pub height: i32,
    /// Weight in grams
    pub weight: i32,
    pub citizenship: String,
    #[schema(value_type = String, example = "PG")]
    pub role: PlayerRole,
    pub team_id: i64,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id.get(),
            name: player.name,
            surname: player.surname,
            age: player.age,
            height: player.height,
            weight: player.weight,
            citizenship: player.citizenship,
            role: player.role,
            team_id: player.team_id.get(),
        }
    }
}

/// Create player request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "John")]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Doe")]
    pub surname: String,

    #[validate(range(min = 15, max = 60))]
    pub age: i32,

    /// Height in millimetres
    #[validate(range(min = 1000, max = 2600))]
    pub height: i32,

    /// Weight in grams
    #[validate(range(min = 30000, max = 250000))]
    pub weight: i32,

    #[validate(length(min = 1, max = 50))]
    pub citizenship: String,

    #[schema(value_type = String, example = "PG")]
    pub role: PlayerRole,

    #[validate(range(min = 1))]
    pub team_id: u32,
}

impl From<CreatePlayerRequest> for PlayerDraft {
    fn from(req: CreatePlayerRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            age: req.age,
            height: req.height,
            weight: req.weight,
            citizenship: req.citizenship,
            role: req.role,
            team_id: TeamId::new(i64::from(req.team_id)),
        }
    }
}

/// Update player request
///
/// A body with every field replaces the player. Omitted fields keep their
/// stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub surname: Option<String>,

    #[validate(range(min = 15, max = 60))]
    pub age: Option<i32>,

    #[validate(range(min = 1000, max = 2600))]
    pub height: Option<i32>,

    #[validate(range(min = 30000, max = 250000))]
    pub weight: Option<i32>,

    #[validate(length(min = 1, max = 50))]
    pub citizenship: Option<String>,

    #[schema(value_type = Option<String>, example = "C")]
    pub role: Option<PlayerRole>,

    #[validate(range(min = 1))]
    pub team_id: Option<u32>,
}

impl From<UpdatePlayerRequest> for PlayerUpdate {
    fn from(req: UpdatePlayerRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            age: req.age,
            height: req.height,
            weight: req.weight,
            citizenship: req.citizenship,
            role: req.role,
            team_id: req.team_id.map(|id| TeamId::new(i64::from(id))),
        }
    }
}

/// Query parameters for listing players
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPlayersQuery {
    /// Items per page (default 50)
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<u32>,

    /// 1-indexed page number (default 1)
    #[validate(range(min = 1))]
    pub page_number: Option<u32>,
}

impl ListPlayersQuery {
    /// Page request with defaults filled in
    pub fn resolve(&self) -> Result<PageRequest, PaginationError> {
        PageRequest::with_defaults(
            self.page_size.map(u64::from),
            self.page_number.map(u64::from),
        )
    }
}

/// Player routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route(
            "/players/:id",
            get(get_player).put(update_player).delete(delete_player),
        )
}

/// Create player
#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created", body = PlayerResponse),
        (status = 400, description = "Invalid request or unknown team"),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_player(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    ValidatedJson(req): ValidatedJson<CreatePlayerRequest>,
) -> ApiResult<Created<PlayerResponse>> {
    let player = state.player_service.create(&ctx, req.into()).await?;
    debug!(player_id = %player.id, "Created player");
    Ok(Created(player.into()))
}

/// List players
///
/// Returns one page of players. Order is not guaranteed.
#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    params(ListPlayersQuery),
    responses(
        (status = 200, description = "Page of players", body = [PlayerResponse]),
        (status = 400, description = "Invalid pagination"),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_players(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    ValidatedQuery(query): ValidatedQuery<ListPlayersQuery>,
) -> ApiResult<Json<Vec<PlayerResponse>>> {
    let page = query.resolve().map_err(PlayerError::from)?;
    let players = state
        .player_service
        .list(&ctx, page.page_size(), page.page_number())
        .await?;

    Ok(Json(players.into_iter().map(Into::into).collect()))
}

/// Get player by id
#[utoipa::path(
    get,
    path = "/players/{id}",
    tag = "players",
    params(("id" = i64, Path, description = "Player id")),
    responses(
        (status = 200, description = "Player found", body = PlayerResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Player not found"),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_player(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    PlayerIdPath(id): PlayerIdPath,
) -> ApiResult<Json<PlayerResponse>> {
    let player = state.player_service.get(&ctx, id).await?;
    Ok(Json(player.into()))
}

/// Update player
#[utoipa::path(
    put,
    path = "/players/{id}",
    tag = "players",
    params(("id" = i64, Path, description = "Player id")),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Player updated", body = PlayerResponse),
        (status = 400, description = "Invalid request or unknown team"),
        (status = 404, description = "Player not found"),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_player(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    PlayerIdPath(id): PlayerIdPath,
    ValidatedJson(req): ValidatedJson<UpdatePlayerRequest>,
) -> ApiResult<Json<PlayerResponse>> {
    let player = state.player_service.update(&ctx, id, req.into()).await?;
    Ok(Json(player.into()))
}

/// Delete player
#[utoipa::path(
    delete,
    path = "/players/{id}",
    tag = "players",
    params(("id" = i64, Path, description = "Player id")),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Player not found"),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_player(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    PlayerIdPath(id): PlayerIdPath,
) -> ApiResult<NoContent> {
    state.player_service.delete(&ctx, id).await?;
    debug!(player_id = %id, "Deleted player");
    Ok(NoContent)
}
