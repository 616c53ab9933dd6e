//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for public list endpoints (`?all=true`).
///
/// Without `all`, only records with `is_active = true` are returned.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub all: bool,
}

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the repository layer via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Pagination plus an optional `status` filter, used by the admin inbox
/// listings (enquiries, doubts).
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilterParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
