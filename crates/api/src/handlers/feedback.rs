//! Handlers for the `/feedback` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use civicdesk_core::error::CoreError;
use civicdesk_core::types::DbId;
use civicdesk_db::models::feedback::{CreateFeedback, Feedback};
use civicdesk_db::repositories::{ComplaintRepo, FeedbackRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/feedback?limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list(&state.pool, params.limit).await?;
    Ok(Json(feedback))
}

/// GET /api/feedback/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Feedback>> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;
    Ok(Json(feedback))
}

/// POST /api/feedback
///
/// The referenced user and complaint are checked with separate lookups
/// before the insert, so a dangling id yields 404 rather than a storage
/// error. An insert failure past those checks (e.g. the rating CHECK) is
/// reported as a generic 400 with the driver's message.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    // 1. Reject out-of-range ratings before any storage call.
    input.validate()?;

    // 2. Verify both referenced rows exist.
    if !UserRepo::exists(&state.pool, input.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }));
    }
    if !ComplaintRepo::exists(&state.pool, input.complaint_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id: input.complaint_id,
        }));
    }

    // 3. Insert.
    let feedback = FeedbackRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok((StatusCode::CREATED, Json(feedback)))
}
