//! Shared helpers for router tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use basketball_api_rest::{create_app, state::AlwaysReady, ApiConfig, AppState, MetricsRecorder};
use basketball_application::{PlayerService, PlayerUseCase};
use basketball_testing::InMemoryPlayerRepository;
use http_body_util::BodyExt;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Completed request as seen by the recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    pub method: String,
    pub endpoint: String,
    pub status: u16,
}

/// Recorder that keeps every observation in memory
#[derive(Default)]
pub struct RecordingMetrics {
    completed: Mutex<Vec<Completed>>,
    in_flight: Mutex<HashMap<(String, String), i64>>,
}

impl RecordingMetrics {
    pub fn completed(&self) -> Vec<Completed> {
        self.completed.lock().clone()
    }

    pub fn in_flight(&self, method: &str, endpoint: &str) -> i64 {
        self.in_flight
            .lock()
            .get(&(method.to_string(), endpoint.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn seen_endpoints(&self) -> Vec<String> {
        self.completed
            .lock()
            .iter()
            .map(|c| c.endpoint.clone())
            .collect()
    }
}

impl MetricsRecorder for RecordingMetrics {
    fn request_started(&self, method: &str, endpoint: &str) {
        *self
            .in_flight
            .lock()
            .entry((method.to_string(), endpoint.to_string()))
            .or_insert(0) += 1;
    }

    fn request_completed(&self, method: &str, endpoint: &str, status: u16, _elapsed: Duration) {
        self.completed.lock().push(Completed {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            status,
        });
    }

    fn request_released(&self, method: &str, endpoint: &str) {
        *self
            .in_flight
            .lock()
            .entry((method.to_string(), endpoint.to_string()))
            .or_insert(0) -= 1;
    }
}

/// Router under test plus handles on its collaborators
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryPlayerRepository>,
    pub metrics: Arc<RecordingMetrics>,
}

impl TestApp {
    /// App over an in-memory store with team 1 registered
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        let repository = Arc::new(InMemoryPlayerRepository::with_teams([1]));
        let service: Arc<dyn PlayerUseCase> = Arc::new(PlayerService::new(repository.clone()));
        let metrics = Arc::new(RecordingMetrics::default());

        let state = AppState::new(config, service, metrics.clone(), Arc::new(AlwaysReady));

        Self {
            router: create_app(state),
            repository,
            metrics,
        }
    }

    /// App over an arbitrary use case
    pub fn with_service(config: ApiConfig, service: Arc<dyn PlayerUseCase>) -> Self {
        let metrics = Arc::new(RecordingMetrics::default());
        let state = AppState::new(config, service, metrics.clone(), Arc::new(AlwaysReady));

        Self {
            router: create_app(state),
            repository: Arc::new(InMemoryPlayerRepository::new()),
            metrics,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(empty_request(Method::GET, uri)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(empty_request(Method::DELETE, uri)).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(json_request(Method::POST, uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(json_request(Method::PUT, uri, body)).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn john_doe() -> Value {
    serde_json::json!({
        "name": "John",
        "surname": "Doe",
        "age": 25,
        "height": 1900,
        "weight": 85000,
        "citizenship": "USA",
        "role": "PG",
        "team_id": 1
    })
}
