//! Handler for the `/database` admin dump.

use axum::extract::State;
use axum::Json;

use civicdesk_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/database
///
/// Debug view of the whole schema: every base table, keyed by name, capped
/// rows per table. The tables are enumerated from the catalog at request
/// time, so new tables show up without code changes.
pub async fn dump(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let dump = CatalogRepo::dump_all(&state.pool).await?;
    Ok(Json(serde_json::Value::Object(dump)))
}
