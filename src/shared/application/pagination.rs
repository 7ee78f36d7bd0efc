/// Pagination support for queries
///
/// Standard 1-indexed pagination model shared by every listing endpoint
use serde::{Deserialize, Serialize};

pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 5,
        }
    }
}

impl PaginationParams {
    /// Pages start at 1 and `per_page` is kept within `1..=MAX_PER_PAGE`.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Build from optional query values, falling back to page 1 and `default_per_page`.
    /// Out-of-range values, negative ones included, are clamped like `new` does.
    pub fn from_query(page: Option<i64>, per_page: Option<i64>, default_per_page: u32) -> Self {
        let page = page.unwrap_or(1).clamp(1, u32::MAX as i64) as u32;
        let per_page = per_page
            .unwrap_or(default_per_page as i64)
            .clamp(1, MAX_PER_PAGE as i64) as u32;
        Self::new(page, per_page)
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub page: u32,
    #[serde(rename = "perPage")]
    pub per_page: u32,
    pub data: Vec<T>,
    pub total: i64,
    #[serde(rename = "totalPage")]
    pub total_page: i64,
}

impl<T> PaginatedResult<T> {
    pub fn new(data: Vec<T>, total: i64, params: &PaginationParams) -> Self {
        let per_page = params.per_page as i64;
        let total_page = (total + per_page - 1) / per_page;

        Self {
            page: params.page,
            per_page: params.per_page,
            data,
            total,
            total_page,
        }
    }
}
