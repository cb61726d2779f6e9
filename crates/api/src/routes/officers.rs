//! Route definitions for the `/officers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::officers;
use crate::state::AppState;

/// Routes mounted at `/officers`.
///
/// ```text
/// GET /        -> list
/// GET /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(officers::list))
        .route("/{id}", get(officers::get_by_id))
}
