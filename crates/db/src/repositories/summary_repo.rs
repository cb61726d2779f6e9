//! Read access to the summary views and SQL function bridges.
//!
//! Everything here is pass-through: the joins live in the
//! `complaintsummary` / `feedbacksummary` views and the logic in the
//! `file_complaint` / `officer_workload` / `complaints_by_status` functions.

use sqlx::PgPool;

use civicdesk_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use civicdesk_core::types::DbId;

use crate::models::complaint::Complaint;
use crate::models::summary::{ComplaintSummary, FeedbackSummary, OfficerWorkloadEntry};

/// Provides read operations over views and stored functions.
pub struct SummaryRepo;

impl SummaryRepo {
    /// List rows of the `complaintsummary` view, newest complaint first.
    pub async fn complaint_summaries(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<ComplaintSummary>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        sqlx::query_as::<_, ComplaintSummary>(
            "SELECT * FROM complaintsummary ORDER BY submitted_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// List rows of the `feedbacksummary` view, newest feedback first.
    pub async fn feedback_summaries(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<FeedbackSummary>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        sqlx::query_as::<_, FeedbackSummary>(
            "SELECT * FROM feedbacksummary ORDER BY submitted_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// File a complaint through the `file_complaint` SQL function, returning
    /// the new complaint id when the function yields one.
    pub async fn file_complaint(
        pool: &PgPool,
        user_id: DbId,
        category: &str,
        description: &str,
        location: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT file_complaint($1, $2, $3, $4)")
            .bind(user_id)
            .bind(category)
            .bind(description)
            .bind(location)
            .fetch_optional(pool)
            .await
    }

    /// Complaints currently assigned to an officer, newest assignment first.
    pub async fn officer_workload(
        pool: &PgPool,
        officer_id: DbId,
    ) -> Result<Vec<OfficerWorkloadEntry>, sqlx::Error> {
        sqlx::query_as::<_, OfficerWorkloadEntry>("SELECT * FROM officer_workload($1)")
            .bind(officer_id)
            .fetch_all(pool)
            .await
    }

    /// Complaints in a given status via the `complaints_by_status` function,
    /// newest first.
    pub async fn complaints_by_status(
        pool: &PgPool,
        status: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        sqlx::query_as::<_, Complaint>("SELECT * FROM complaints_by_status($1) LIMIT $2")
            .bind(status)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
