//! Offset pagination helpers.
//!
//! Pages are 1-indexed. A page request is only constructed from valid
//! parameters, so holding a [`PageRequest`] means the limit and offset are safe
//! to hand to the store.

use basketball_domain::PlayerError;
use serde::{Deserialize, Serialize};

/// Page size applied when the caller omits it
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Page number applied when the caller omits it
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Invalid pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// Page size below 1
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// Page number below 1
    #[error("page number must be at least 1")]
    InvalidPageNumber,
}

impl From<PaginationError> for PlayerError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::InvalidPageSize => PlayerError::InvalidPageSize,
            PaginationError::InvalidPageNumber => PlayerError::InvalidPageNumber,
        }
    }
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page_size: u64,
    page_number: u64,
}

impl PageRequest {
    /// Validate pagination parameters.
    ///
    /// The page number is checked before the page size.
    pub fn new(page_size: u64, page_number: u64) -> Result<Self, PaginationError> {
        if page_number < 1 {
            return Err(PaginationError::InvalidPageNumber);
        }
        if page_size < 1 {
            return Err(PaginationError::InvalidPageSize);
        }
        Ok(Self {
            page_size,
            page_number,
        })
    }

    /// Build a request from optional parameters, filling in the defaults.
    pub fn with_defaults(
        page_size: Option<u64>,
        page_number: Option<u64>,
    ) -> Result<Self, PaginationError> {
        Self::new(
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
        )
    }

    /// Items per page
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// 1-indexed page number
    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    /// Limit for database queries.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Offset for database queries (0-indexed).
    pub fn offset(&self) -> u64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Limit clamped into the signed range the store binds.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit()).unwrap_or(i64::MAX)
    }

    /// Offset clamped into the signed range the store binds.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset()).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_number: DEFAULT_PAGE_NUMBER,
        }
    }
}
