//! Operation context extractor.

use crate::{middleware::request_id::RequestId, state::AppState};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use basketball_application::OperationContext;
use std::convert::Infallible;
use uuid::Uuid;

/// Operation context carrying the request id and the configured deadline
#[derive(Debug, Clone)]
pub struct RequestContext(pub OperationContext);

#[async_trait]
impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Self(state.operation_context(request_id)))
    }
}
