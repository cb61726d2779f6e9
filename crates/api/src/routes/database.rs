//! Route definition for the `/database` admin dump.

use axum::routing::get;
use axum::Router;

use crate::handlers::database;
use crate::state::AppState;

/// Routes mounted at `/database`.
///
/// ```text
/// GET /    -> dump (every base table, capped rows)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(database::dump))
}
