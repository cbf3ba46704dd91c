//! HTTP middleware components.
//!
//! This module provides middleware for request/response processing including:
//! - Request ID propagation
//! - Request logging
//! - Request metrics
//! - Panic handling

pub mod error_handler;
pub mod logging;
pub mod metrics;
pub mod request_id;

pub use error_handler::handle_panic;
pub use logging::logging_middleware;
pub use metrics::track_metrics;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
