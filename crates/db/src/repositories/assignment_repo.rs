//! Repository for the `complaintassignments` table.

use sqlx::PgPool;

use crate::models::assignment::{Assignment, CreateAssignment};

const COLUMNS: &str = "assignment_id, complaint_id, officer_id, assigned_by, assigned_at";

/// Provides operations for complaint-to-officer assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// List all assignments newest-first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM complaintassignments ORDER BY assigned_at DESC"
        );
        sqlx::query_as::<_, Assignment>(&query).fetch_all(pool).await
    }

    /// Assign a complaint to an officer, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaintassignments (complaint_id, officer_id, assigned_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.complaint_id)
            .bind(input.officer_id)
            .bind(input.assigned_by)
            .fetch_one(pool)
            .await
    }
}
