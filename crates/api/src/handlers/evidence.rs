//! Handlers for the `/evidence` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use civicdesk_core::types::DbId;
use civicdesk_db::models::evidence::{CreateEvidence, Evidence};
use civicdesk_db::repositories::EvidenceRepo;

use crate::error::AppResult;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/evidence?limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Evidence>>> {
    let evidence = EvidenceRepo::list(&state.pool, params.limit).await?;
    Ok(Json(evidence))
}

/// POST /api/evidence
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEvidence>,
) -> AppResult<(StatusCode, Json<Evidence>)> {
    let evidence = EvidenceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(evidence)))
}

/// DELETE /api/evidence/{id}
///
/// Unconditional: succeeds with 204 whether or not the row existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    EvidenceRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
