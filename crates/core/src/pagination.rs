//! Pagination defaults and clamping helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API layer and the repository layer.

/// Default number of transactions per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum number of transactions per page.
pub const MAX_PAGE_LIMIT: i64 = 200;

/// Clamp an optional limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp an optional offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
