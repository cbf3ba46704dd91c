//! API configuration.

use basketball_common::AppConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Router-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// CORS allowed origins, empty allows any origin
    pub cors_allowed_origins: Vec<String>,

    /// Deadline applied to every player operation
    pub request_timeout: Option<Duration>,

    /// Serve the OpenAPI document
    pub enable_openapi: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: Vec::new(),
            request_timeout: Some(Duration::from_secs(30)),
            enable_openapi: true,
        }
    }
}

impl From<&AppConfig> for ApiConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            cors_allowed_origins: config.http.cors_allowed_origins.clone(),
            request_timeout: config.request_timeout(),
            enable_openapi: true,
        }
    }
}
