//! Player id path extractor.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use basketball_domain::PlayerId;

/// `:id` path segment parsed as a positive player id
#[derive(Debug, Clone, Copy)]
pub struct PlayerIdPath(pub PlayerId);

#[async_trait]
impl<S> FromRequestParts<S> for PlayerIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid path: {}", e.body_text())))?;

        match raw.parse::<i64>() {
            Ok(id) if id >= 1 => Ok(Self(PlayerId::new(id))),
            _ => Err(ApiError::BadRequest(format!(
                "Player id must be a positive integer, got '{}'",
                raw
            ))),
        }
    }
}
