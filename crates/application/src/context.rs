//! Per-operation context
//!
//! Every use-case and repository call receives an [`OperationContext`]. It
//! carries the request correlation id for tracing and an optional deadline
//! after which the operation is abandoned.

use basketball_domain::{PlayerError, PlayerResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Context for a single operation
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Request correlation ID for tracing
    request_id: String,
    /// Point after which the operation is cancelled
    deadline: Option<Instant>,
}

impl OperationContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            deadline: None,
        }
    }

    /// Context with a freshly generated correlation id and no deadline.
    pub fn background() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Drive `fut` to completion unless the deadline passes first.
    ///
    /// On expiry the future is dropped, which aborts any in-flight store call,
    /// and [`PlayerError::Cancelled`] is returned. A cancelled write may or may
    /// not have been applied.
    pub async fn run<F, T>(&self, operation: &'static str, fut: F) -> PlayerResult<T>
    where
        F: Future<Output = PlayerResult<T>>,
    {
        match self.deadline {
            None => fut.await,
            Some(deadline) => tokio::time::timeout_at(deadline, fut)
                .await
                .map_err(|_| PlayerError::cancelled(operation))?,
        }
    }
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::background()
    }
}
