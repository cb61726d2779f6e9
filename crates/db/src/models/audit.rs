//! Audit log entity model.
//!
//! The `auditlog` table is populated entirely by row-level triggers; the
//! application only ever reads it, so there is no create DTO here.

use serde::Serialize;
use sqlx::FromRow;

use civicdesk_core::types::{DbId, Timestamp};

/// A single audit log entry. Immutable once written.
///
/// `primary_key` holds the changed row's key as a one-entry JSON object
/// (e.g. `{"complaint_id": 7}`) and `row_data` the full row image at the
/// time of the change.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLogEntry {
    pub audit_id: DbId,
    pub table_name: String,
    pub operation: String,
    pub primary_key: serde_json::Value,
    pub changed_by: Option<DbId>,
    pub changed_at: Timestamp,
    pub row_data: serde_json::Value,
}
