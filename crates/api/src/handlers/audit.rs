//! Handler for the `/audit` resource.

use axum::extract::{Query, State};
use axum::Json;

use civicdesk_db::models::audit::AuditLogEntry;
use civicdesk_db::repositories::AuditRepo;

use crate::error::AppResult;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/audit?limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<AuditLogEntry>>> {
    let entries = AuditRepo::list(&state.pool, params.limit).await?;
    Ok(Json(entries))
}
