//! Route definitions for the `/complaints` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::complaints;
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// `/stats` and `/categories` are static segments, so they take precedence
/// over the `/{id}` capture.
///
/// ```text
/// GET    /                -> list (?status=&limit=)
/// POST   /                -> create
/// GET    /stats           -> stats
/// GET    /categories      -> categories
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// PUT    /{id}/status     -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(complaints::list).post(complaints::create))
        .route("/stats", get(complaints::stats))
        .route("/categories", get(complaints::categories))
        .route(
            "/{id}",
            get(complaints::get_by_id)
                .put(complaints::update)
                .delete(complaints::delete),
        )
        .route("/{id}/status", put(complaints::update_status))
}
