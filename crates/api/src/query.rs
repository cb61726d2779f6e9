//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic list parameters (`?limit=`).
///
/// Used by any handler that supports a row cap. Values are clamped via
/// `clamp_limit` before reaching the repository layer.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

/// Query parameters for the complaint list (`?status=&limit=`).
#[derive(Debug, Deserialize)]
pub struct ComplaintListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

/// Query parameters for the `file_complaint` function bridge. All three
/// content fields are required.
#[derive(Debug, Deserialize)]
pub struct FileComplaintParams {
    pub category: String,
    pub description: String,
    pub location: String,
}

/// Query parameters for the `complaints_by_status` function bridge.
#[derive(Debug, Deserialize)]
pub struct ComplaintsByStatusParams {
    pub status: String,
    pub limit: Option<i64>,
}
