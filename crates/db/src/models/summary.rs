//! Typed rows for the read-only summary views and SQL function bridges.

use serde::Serialize;
use sqlx::FromRow;

use civicdesk_core::types::{DbId, Timestamp};

/// One row of the `complaintsummary` view: a complaint joined with its
/// citizen and, when assigned, the officer from the most recent assignment.
///
/// Officer columns are null for complaints that were never assigned.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComplaintSummary {
    pub complaint_id: DbId,
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub submitted_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub last_updated_at: Timestamp,
    pub citizen_id: DbId,
    pub citizen_name: String,
    pub citizen_email: String,
    pub officer_id: Option<DbId>,
    pub officer_name: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

/// One row of the `feedbacksummary` view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackSummary {
    pub feedback_id: DbId,
    pub rating: i32,
    pub comments: Option<String>,
    pub submitted_at: Timestamp,
    pub complaint_id: DbId,
    pub citizen_name: String,
    pub officer_name: Option<String>,
}

/// One row of the `officer_workload(officer_id)` function's result set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OfficerWorkloadEntry {
    pub complaint_id: DbId,
    pub category: Option<String>,
    pub status: String,
    pub submitted_at: Timestamp,
    pub assigned_at: Timestamp,
}
