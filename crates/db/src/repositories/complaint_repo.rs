//! Repository for the `complaints` table.

use sqlx::PgPool;

use civicdesk_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use civicdesk_core::types::DbId;

use crate::models::complaint::{
    Complaint, CreateComplaint, StatusCount, UpdateComplaint, UpdateComplaintStatus,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "complaint_id, user_id, category, description, location, status, \
                       submitted_at, resolved_at, last_updated_at";

/// Provides CRUD operations and aggregates for complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// Insert a new complaint. Status is forced to `'Pending'`; the column
    /// defaults set `submitted_at` and `last_updated_at` to the same instant.
    pub async fn create(pool: &PgPool, input: &CreateComplaint) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints (user_id, category, description, location, status)
             VALUES ($1, $2, $3, $4, 'Pending')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(input.user_id)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find a complaint by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE complaint_id = $1");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a complaint row with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM complaints WHERE complaint_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// List complaints newest-first, optionally filtered to one status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        match status {
            Some(status) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM complaints WHERE status = $1
                     ORDER BY submitted_at DESC LIMIT $2"
                );
                sqlx::query_as::<_, Complaint>(&query)
                    .bind(status)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM complaints ORDER BY submitted_at DESC LIMIT $1"
                );
                sqlx::query_as::<_, Complaint>(&query)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Per-status complaint counts, ordered by status name.
    pub async fn status_counts(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM complaints GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Distinct non-null categories in alphabetical order.
    pub async fn categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM complaints
             WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(pool)
        .await
    }

    /// Set a complaint's status and refresh `last_updated_at`. Any string is
    /// accepted as a status.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComplaintStatus,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET status = $2, last_updated_at = NOW()
             WHERE complaint_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Replace a complaint's content fields and refresh `last_updated_at`.
    /// Status is untouched; an omitted field is written as NULL.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update_fields(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComplaint,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET
                category = $2,
                description = $3,
                location = $4,
                last_updated_at = NOW()
             WHERE complaint_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Delete a complaint by id. Succeeds whether or not the row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM complaints WHERE complaint_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
