//! Officer entity model.

use serde::Serialize;
use sqlx::FromRow;

use civicdesk_core::types::{DbId, Timestamp};

/// Full officer row from the `officers` table. One profile per user account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Officer {
    pub officer_id: DbId,
    pub user_id: DbId,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub created_at: Timestamp,
}
