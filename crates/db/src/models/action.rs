//! Complaint action entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use civicdesk_core::types::{DbId, Timestamp};

/// Full action row from the `complaintactions` table. A logged step taken by
/// an officer on a complaint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComplaintAction {
    pub action_id: DbId,
    pub complaint_id: DbId,
    pub officer_id: DbId,
    pub action_taken: String,
    pub is_final: bool,
    pub action_date: Timestamp,
}

/// DTO for recording an action against a complaint.
#[derive(Debug, Deserialize)]
pub struct CreateAction {
    pub complaint_id: DbId,
    pub officer_id: DbId,
    pub action_taken: String,
    #[serde(default)]
    pub is_final: bool,
}
