//! Handlers for the `/actions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use civicdesk_db::models::action::{ComplaintAction, CreateAction};
use civicdesk_db::repositories::ActionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/actions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ComplaintAction>>> {
    let actions = ActionRepo::list(&state.pool).await?;
    Ok(Json(actions))
}

/// POST /api/actions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAction>,
) -> AppResult<(StatusCode, Json<ComplaintAction>)> {
    let action = ActionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(action)))
}
