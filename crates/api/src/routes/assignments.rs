//! Route definitions for the `/assignments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::assignments;
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// GET  /    -> list
/// POST /    -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(assignments::list).post(assignments::create))
}
