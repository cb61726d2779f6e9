//! Handlers for the `/complaints` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use civicdesk_core::error::CoreError;
use civicdesk_core::types::DbId;
use civicdesk_db::models::complaint::{
    Complaint, CreateComplaint, StatusCount, UpdateComplaint, UpdateComplaintStatus,
};
use civicdesk_db::repositories::ComplaintRepo;

use crate::error::{AppError, AppResult};
use crate::query::ComplaintListParams;
use crate::state::AppState;

/// GET /api/complaints?status=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ComplaintListParams>,
) -> AppResult<Json<Vec<Complaint>>> {
    let complaints =
        ComplaintRepo::list(&state.pool, params.status.as_deref(), params.limit).await?;
    Ok(Json(complaints))
}

/// GET /api/complaints/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<Vec<StatusCount>>> {
    let counts = ComplaintRepo::status_counts(&state.pool).await?;
    Ok(Json(counts))
}

/// GET /api/complaints/categories
pub async fn categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let categories = ComplaintRepo::categories(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/complaints
///
/// Status is forced to `"Pending"`; `user_id` is not pre-checked, so a bad
/// reference surfaces as a storage error from the foreign key.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateComplaint>,
) -> AppResult<(StatusCode, Json<Complaint>)> {
    let complaint = ComplaintRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(complaint)))
}

/// GET /api/complaints/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Complaint>> {
    let complaint = ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    Ok(Json(complaint))
}

/// PUT /api/complaints/{id}/status
///
/// Accepts any status string, including transitions out of terminal states.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaintStatus>,
) -> AppResult<Json<Complaint>> {
    let complaint = ComplaintRepo::update_status(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    Ok(Json(complaint))
}

/// PUT /api/complaints/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaint>,
) -> AppResult<Json<Complaint>> {
    let complaint = ComplaintRepo::update_fields(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    Ok(Json(complaint))
}

/// DELETE /api/complaints/{id}
///
/// Unconditional: succeeds with 204 whether or not the row existed. This is
/// deliberately asymmetric with the update endpoints, which 404.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ComplaintRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
