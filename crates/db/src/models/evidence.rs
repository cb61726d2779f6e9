//! Complaint evidence entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use civicdesk_core::types::{DbId, Timestamp};

/// Full evidence row from the `complaintevidence` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Evidence {
    pub evidence_id: DbId,
    pub complaint_id: DbId,
    pub file_path: String,
    pub mime_type: Option<String>,
    pub uploaded_at: Timestamp,
}

/// DTO for attaching evidence to a complaint.
#[derive(Debug, Deserialize)]
pub struct CreateEvidence {
    pub complaint_id: DbId,
    pub file_path: String,
    pub mime_type: Option<String>,
}
