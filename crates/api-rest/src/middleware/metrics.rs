//! Request metrics middleware.
//!
//! Installed with `Router::route_layer` so the matched route pattern is
//! available; requests are labelled `/players/:id`, never `/players/42`.

use crate::metrics::MetricsRecorder;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

/// Record in-flight, duration and count for every routed request
pub async fn track_metrics(
    State(recorder): State<Arc<dyn MetricsRecorder>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().as_str().to_string();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let guard = InFlightGuard::start(Arc::clone(&recorder), method, endpoint);

    let response = next.run(req).await;

    recorder.request_completed(
        &guard.method,
        &guard.endpoint,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}

/// Holds one in-flight slot and releases it on drop, including on unwind
/// or when the request future is abandoned.
struct InFlightGuard {
    recorder: Arc<dyn MetricsRecorder>,
    method: String,
    endpoint: String,
}

impl InFlightGuard {
    fn start(recorder: Arc<dyn MetricsRecorder>, method: String, endpoint: String) -> Self {
        recorder.request_started(&method, &endpoint);
        Self {
            recorder,
            method,
            endpoint,
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.recorder.request_released(&self.method, &self.endpoint);
    }
}
