//! Error types for the basketball registry domain.
//!
//! The taxonomy is deliberately flat. Four sentinel conditions are classified
//! by callers; every other failure is opaque and carries its source so it can
//! be logged, but callers never branch on what is inside it.

/// Boxed error used as the source of opaque failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Player operation errors
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// No player with the requested identifier
    #[error("player not found")]
    NotFound,

    /// The referenced team does not exist
    #[error("team with this id not found")]
    TeamNotFound,

    /// Page size below 1
    #[error("invalid page size for listing player")]
    InvalidPageSize,

    /// Page number below 1
    #[error("invalid page number for listing player")]
    InvalidPageNumber,

    /// The operation context expired before the store answered.
    ///
    /// For writes the outcome is indeterminate: the statement may or may not
    /// have been applied.
    #[error("{operation}: operation cancelled")]
    Cancelled {
        /// Operation that was cut short
        operation: &'static str,
    },

    /// Any other failure (connection, malformed row, constraint violation)
    #[error("{operation}: {source}")]
    Internal {
        /// Operation that failed
        operation: &'static str,
        /// Underlying cause
        #[source]
        source: BoxError,
    },
}

impl PlayerError {
    /// Wrap an unclassified failure.
    pub fn internal<E>(operation: &'static str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Internal {
            operation,
            source: source.into(),
        }
    }

    /// Signal that the operation context expired.
    pub fn cancelled(operation: &'static str) -> Self {
        Self::Cancelled { operation }
    }

    /// Whether this is one of the four classified conditions
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::TeamNotFound | Self::InvalidPageSize | Self::InvalidPageNumber
        )
    }
}

/// Result type for player operations
pub type PlayerResult<T> = Result<T, PlayerError>;
