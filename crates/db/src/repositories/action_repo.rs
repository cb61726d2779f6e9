//! Repository for the `complaintactions` table.

use sqlx::PgPool;

use crate::models::action::{ComplaintAction, CreateAction};

const COLUMNS: &str = "action_id, complaint_id, officer_id, action_taken, is_final, action_date";

/// Provides operations for logged complaint actions.
pub struct ActionRepo;

impl ActionRepo {
    /// List all actions newest-first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ComplaintAction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaintactions ORDER BY action_date DESC");
        sqlx::query_as::<_, ComplaintAction>(&query)
            .fetch_all(pool)
            .await
    }

    /// Record an action against a complaint, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAction,
    ) -> Result<ComplaintAction, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaintactions (complaint_id, officer_id, action_taken, is_final)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ComplaintAction>(&query)
            .bind(input.complaint_id)
            .bind(input.officer_id)
            .bind(&input.action_taken)
            .bind(input.is_final)
            .fetch_one(pool)
            .await
    }
}
