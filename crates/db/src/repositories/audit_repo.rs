//! Repository for the `auditlog` table.

use sqlx::PgPool;

use civicdesk_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

use crate::models::audit::AuditLogEntry;

const COLUMNS: &str = "audit_id, table_name, operation, primary_key, changed_by, changed_at, \
                       row_data";

/// Read access to the trigger-populated audit trail.
pub struct AuditRepo;

impl AuditRepo {
    /// List audit entries newest-first.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<AuditLogEntry>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let query = format!("SELECT {COLUMNS} FROM auditlog ORDER BY changed_at DESC LIMIT $1");
        sqlx::query_as::<_, AuditLogEntry>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
