//! Route definitions for the `/evidence` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::evidence;
use crate::state::AppState;

/// Routes mounted at `/evidence`.
///
/// ```text
/// GET    /        -> list (?limit=)
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(evidence::list).post(evidence::create))
        .route("/{id}", delete(evidence::delete))
}
