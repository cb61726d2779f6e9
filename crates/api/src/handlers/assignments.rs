//! Handlers for the `/assignments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use civicdesk_db::models::assignment::{Assignment, CreateAssignment};
use civicdesk_db::repositories::AssignmentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/assignments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list(&state.pool).await?;
    Ok(Json(assignments))
}

/// POST /api/assignments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let assignment = AssignmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}
