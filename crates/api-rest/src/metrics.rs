//! HTTP request metrics.
//!
//! [`MetricsRecorder`] is the sink the metrics middleware writes to. The
//! production implementation, [`PrometheusRecorder`], owns a private registry
//! that is exposed on a separate listener by [`metrics_router`].

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Sink for per-request measurements, labelled by method and route pattern.
pub trait MetricsRecorder: Send + Sync {
    /// A request entered the handler stack
    fn request_started(&self, method: &str, endpoint: &str);

    /// A response was produced
    fn request_completed(&self, method: &str, endpoint: &str, status: u16, elapsed: Duration);

    /// The request left the handler stack, whether or not a response was produced
    fn request_released(&self, method: &str, endpoint: &str);
}

/// Prometheus-backed recorder
#[derive(Clone)]
pub struct PrometheusRecorder {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration: HistogramVec,
    requests_in_flight: IntGaugeVec,
}

impl PrometheusRecorder {
    /// Create the instruments and register them in a fresh registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "endpoint", "status_code"],
        )?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(prometheus::DEFAULT_BUCKETS.to_vec()),
            &["method", "endpoint"],
        )?;
        let requests_in_flight = IntGaugeVec::new(
            Opts::new(
                "http_requests_in_flight",
                "Current number of HTTP requests in flight",
            ),
            &["method", "endpoint"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
            requests_in_flight,
        })
    }

    /// Render every registered family in the Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl MetricsRecorder for PrometheusRecorder {
    fn request_started(&self, method: &str, endpoint: &str) {
        self.requests_in_flight
            .with_label_values(&[method, endpoint])
            .inc();
    }

    fn request_completed(&self, method: &str, endpoint: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.requests_total
            .with_label_values(&[method, endpoint, status.as_str()])
            .inc();
        self.request_duration
            .with_label_values(&[method, endpoint])
            .observe(elapsed.as_secs_f64());
    }

    fn request_released(&self, method: &str, endpoint: &str) {
        self.requests_in_flight
            .with_label_values(&[method, endpoint])
            .dec();
    }
}

/// Router serving `GET /metrics` for the given recorder
pub fn metrics_router(recorder: Arc<PrometheusRecorder>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(recorder)
}

async fn metrics_handler(State(recorder): State<Arc<PrometheusRecorder>>) -> Response {
    match recorder.render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
