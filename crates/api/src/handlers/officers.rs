//! Handlers for the `/officers` resource.

use axum::extract::{Path, State};
use axum::Json;

use civicdesk_core::error::CoreError;
use civicdesk_core::types::DbId;
use civicdesk_db::models::officer::Officer;
use civicdesk_db::repositories::OfficerRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/officers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Officer>>> {
    let officers = OfficerRepo::list(&state.pool).await?;
    Ok(Json(officers))
}

/// GET /api/officers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Officer>> {
    let officer = OfficerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Officer",
            id,
        }))?;
    Ok(Json(officer))
}
