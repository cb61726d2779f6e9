//! Complaint entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use civicdesk_core::types::{DbId, Timestamp};

/// Full complaint row from the `complaints` table.
///
/// `status` is free-form text. New rows always start at `"Pending"` with
/// `submitted_at == last_updated_at` and `resolved_at` null; the application
/// never sets `resolved_at` itself.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Complaint {
    pub complaint_id: DbId,
    pub user_id: DbId,
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub submitted_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub last_updated_at: Timestamp,
}

/// DTO for filing a new complaint. Status is never caller-supplied; the
/// insert forces `"Pending"`.
#[derive(Debug, Deserialize)]
pub struct CreateComplaint {
    pub user_id: DbId,
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// DTO for the status-update endpoint. Any string is accepted.
#[derive(Debug, Deserialize)]
pub struct UpdateComplaintStatus {
    pub status: String,
}

/// DTO for the content-update endpoint. Replaces category, description, and
/// location wholesale (an omitted field writes NULL); status is untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateComplaint {
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// One row of the per-status complaint count aggregate.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}
