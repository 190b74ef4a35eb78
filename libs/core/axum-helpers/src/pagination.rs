//! Pagination primitives shared by list endpoints.
//!
//! Raw query parameters are never rejected for being out of range; the
//! accessors sanitize them instead (page defaults to 1, page size to 10,
//! capped at 100). Offset/limit are derived from the sanitized values, so
//! callers can pass this struct straight through to a repository.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Raw `page`/`page_size` query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PaginationRequest {
    /// Requested page number (1-based; values below 1 are coerced to 1)
    #[serde(default)]
    pub page: i64,
    /// Requested items per page (defaults to 10, capped at 100)
    #[serde(default)]
    pub page_size: i64,
}

impl PaginationRequest {
    pub const DEFAULT_PAGE_SIZE: i64 = 10;
    pub const MAX_PAGE_SIZE: i64 = 100;

    /// Page number with a floor of 1.
    pub fn page(&self) -> i64 {
        if self.page <= 0 {
            1
        } else {
            self.page
        }
    }

    /// Page size defaulted to 10 and capped at 100.
    pub fn page_size(&self) -> i64 {
        if self.page_size <= 0 {
            Self::DEFAULT_PAGE_SIZE
        } else if self.page_size > Self::MAX_PAGE_SIZE {
            Self::MAX_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// Rows to skip.
    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.page_size()) as u64
    }

    /// Rows to return.
    pub fn limit(&self) -> u64 {
        self.page_size() as u64
    }
}

/// Pagination information attached to list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMetadata {
    /// Current page number
    pub page: i64,
    /// Items per page
    pub page_size: i64,
    /// Total number of items across all pages
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: i64,
    /// Whether there is a next page
    pub has_next: bool,
    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMetadata {
    pub fn new(request: &PaginationRequest, total_items: u64) -> Self {
        let page = request.page();
        let page_size = request.page_size();
        let total_pages = total_items.div_ceil(page_size as u64) as i64;

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Generic paginated response wrapper: `{data, pagination}`
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMetadata,
}
