//! Feedback entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use civicdesk_core::types::{DbId, Timestamp};

/// Full feedback row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub feedback_id: DbId,
    pub complaint_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comments: Option<String>,
    pub submitted_at: Timestamp,
}

/// DTO for submitting feedback on a complaint.
///
/// The rating bound is validated before any storage call; the handler also
/// checks that both referenced rows exist so a bad id yields 404, not 500.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeedback {
    pub complaint_id: DbId,
    pub user_id: DbId,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub comments: Option<String>,
}
