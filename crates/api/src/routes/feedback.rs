//! Route definitions for the `/feedback` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// GET  /        -> list (?limit=)
/// POST /        -> create
/// GET  /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list).post(feedback::create))
        .route("/{id}", get(feedback::get_by_id))
}
