//! Application builder.
//!
//! Assembles routes, middleware and state into an Axum router.

use crate::{
    config::ApiConfig,
    middleware::{handle_panic, logging_middleware, request_id_middleware, track_metrics},
    routes,
    state::AppState,
};
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware, Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);

    let mut app = Router::new()
        .merge(routes::health_routes())
        .merge(routes::player_routes());

    if state.config.enable_openapi {
        app = app.merge(routes::openapi_routes());
    }

    app.route_layer(middleware::from_fn_with_state(
        state.metrics.clone(),
        track_metrics,
    ))
    .with_state(state)
    .layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware))
            .layer(middleware::from_fn(logging_middleware))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(cors),
    )
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let origin = if config.cors_allowed_origins.is_empty()
        || config.cors_allowed_origins.iter().any(|o| o == "*")
    {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .max_age(Duration::from_secs(300))
}
