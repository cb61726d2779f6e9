//! Repository for the `complaintevidence` table.

use sqlx::PgPool;

use civicdesk_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use civicdesk_core::types::DbId;

use crate::models::evidence::{CreateEvidence, Evidence};

const COLUMNS: &str = "evidence_id, complaint_id, file_path, mime_type, uploaded_at";

/// Provides operations for complaint evidence records.
pub struct EvidenceRepo;

impl EvidenceRepo {
    /// List evidence newest-first.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<Evidence>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM complaintevidence ORDER BY uploaded_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Evidence>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Attach an evidence record to a complaint, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvidence) -> Result<Evidence, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaintevidence (complaint_id, file_path, mime_type)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Evidence>(&query)
            .bind(input.complaint_id)
            .bind(&input.file_path)
            .bind(&input.mime_type)
            .fetch_one(pool)
            .await
    }

    /// Delete an evidence record by id. Succeeds whether or not the row
    /// existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM complaintevidence WHERE evidence_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
