//! Complaint assignment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use civicdesk_core::types::{DbId, Timestamp};

/// Full assignment row from the `complaintassignments` table.
///
/// `assigned_by` is attribution only and may be null (either never supplied
/// or the assigning user was since deleted).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub assignment_id: DbId,
    pub complaint_id: DbId,
    pub officer_id: DbId,
    pub assigned_by: Option<DbId>,
    pub assigned_at: Timestamp,
}

/// DTO for assigning a complaint to an officer.
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub complaint_id: DbId,
    pub officer_id: DbId,
    pub assigned_by: Option<DbId>,
}
