//! Repository for the `feedback` table.

use sqlx::PgPool;

use civicdesk_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use civicdesk_core::types::DbId;

use crate::models::feedback::{CreateFeedback, Feedback};

const COLUMNS: &str = "feedback_id, complaint_id, user_id, rating, comments, submitted_at";

/// Provides operations for complaint feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// List feedback newest-first.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<Feedback>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM feedback ORDER BY submitted_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a feedback entry by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE feedback_id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a feedback entry, returning the created row.
    ///
    /// The caller is expected to have verified that the referenced user and
    /// complaint exist.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (complaint_id, user_id, rating, comments)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.complaint_id)
            .bind(input.user_id)
            .bind(input.rating)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }
}
