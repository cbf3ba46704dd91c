//! Application state and dependency injection.
//!
//! This module defines the shared application state that is passed
//! to all route handlers via Axum's state extraction.

use crate::{config::ApiConfig, metrics::MetricsRecorder};
use async_trait::async_trait;
use basketball_application::{OperationContext, PlayerUseCase};
use basketball_infrastructure::DatabasePool;
use std::sync::Arc;

/// Dependency check behind `/ready`
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn is_ready(&self) -> bool;
}

#[async_trait]
impl ReadinessProbe for DatabasePool {
    async fn is_ready(&self) -> bool {
        self.health_check().await.healthy
    }
}

/// Probe that always reports ready
pub struct AlwaysReady;

#[async_trait]
impl ReadinessProbe for AlwaysReady {
    async fn is_ready(&self) -> bool {
        true
    }
}

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Player use case (type-erased)
    pub player_service: Arc<dyn PlayerUseCase>,

    /// Request metrics sink
    pub metrics: Arc<dyn MetricsRecorder>,

    /// Readiness probe for the backing store
    pub readiness: Arc<dyn ReadinessProbe>,
}

impl AppState {
    pub fn new(
        config: ApiConfig,
        player_service: Arc<dyn PlayerUseCase>,
        metrics: Arc<dyn MetricsRecorder>,
        readiness: Arc<dyn ReadinessProbe>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            player_service,
            metrics,
            readiness,
        }
    }

    /// Build the operation context for one request.
    pub fn operation_context(&self, request_id: impl Into<String>) -> OperationContext {
        let ctx = OperationContext::new(request_id);
        match self.config.request_timeout {
            Some(timeout) => ctx.with_timeout(timeout),
            None => ctx,
        }
    }
}
