//! Handlers for the `/views` resource: summary views and SQL function
//! bridges. These pass parameters through and shape responses; all query
//! logic lives in the database.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use civicdesk_core::types::DbId;
use civicdesk_db::models::complaint::Complaint;
use civicdesk_db::models::summary::{ComplaintSummary, FeedbackSummary, OfficerWorkloadEntry};
use civicdesk_db::repositories::SummaryRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ComplaintsByStatusParams, FileComplaintParams, ListParams};
use crate::state::AppState;

/// Response body for the `file_complaint` bridge.
#[derive(Debug, Serialize)]
pub struct FiledComplaint {
    pub complaint_id: DbId,
}

/// GET /api/views/complaint_summary?limit=
pub async fn complaint_summary(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ComplaintSummary>>> {
    let rows = SummaryRepo::complaint_summaries(&state.pool, params.limit).await?;
    Ok(Json(rows))
}

/// GET /api/views/feedback_summary?limit=
pub async fn feedback_summary(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<FeedbackSummary>>> {
    let rows = SummaryRepo::feedback_summaries(&state.pool, params.limit).await?;
    Ok(Json(rows))
}

/// GET /api/views/file_complaint/{user_id}?category=&description=&location=
pub async fn file_complaint(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<FileComplaintParams>,
) -> AppResult<Json<FiledComplaint>> {
    let complaint_id = SummaryRepo::file_complaint(
        &state.pool,
        user_id,
        &params.category,
        &params.description,
        &params.location,
    )
    .await?
    .ok_or_else(|| AppError::BadRequest("Could not file complaint".into()))?;
    Ok(Json(FiledComplaint { complaint_id }))
}

/// GET /api/views/officer_workload/{officer_id}
pub async fn officer_workload(
    State(state): State<AppState>,
    Path(officer_id): Path<DbId>,
) -> AppResult<Json<Vec<OfficerWorkloadEntry>>> {
    let rows = SummaryRepo::officer_workload(&state.pool, officer_id).await?;
    Ok(Json(rows))
}

/// GET /api/views/complaints_by_status?status=&limit=
pub async fn complaints_by_status(
    State(state): State<AppState>,
    Query(params): Query<ComplaintsByStatusParams>,
) -> AppResult<Json<Vec<Complaint>>> {
    let rows = SummaryRepo::complaints_by_status(&state.pool, &params.status, params.limit).await?;
    Ok(Json(rows))
}
