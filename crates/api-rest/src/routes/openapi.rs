//! OpenAPI document.

use crate::{
    error::ErrorResponse,
    routes::{health, players},
    state::AppState,
};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Basketball Player Registry API",
        version = "1.0.0",
        description = "CRUD API over basketball player records",
        license(name = "MIT"),
    ),
    paths(
        health::health,
        health::ready,
        players::create_player,
        players::list_players,
        players::get_player,
        players::update_player,
        players::delete_player,
    ),
    components(schemas(
        health::HealthResponse,
        health::ReadinessResponse,
        health::ReadinessChecks,
        players::PlayerResponse,
        players::CreatePlayerRequest,
        players::UpdatePlayerRequest,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "players", description = "Player management"),
    )
)]
pub struct ApiDoc;

/// Serves the generated document at `/api-docs/openapi.json`
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
