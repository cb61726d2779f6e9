//! Route definitions for the `/views` resource (summary views and SQL
//! function bridges).

use axum::routing::get;
use axum::Router;

use crate::handlers::views;
use crate::state::AppState;

/// Routes mounted at `/views`.
///
/// ```text
/// GET /complaint_summary          -> complaint_summary (?limit=)
/// GET /feedback_summary           -> feedback_summary (?limit=)
/// GET /file_complaint/{user_id}   -> file_complaint (?category=&description=&location=)
/// GET /officer_workload/{id}      -> officer_workload
/// GET /complaints_by_status       -> complaints_by_status (?status=&limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/complaint_summary", get(views::complaint_summary))
        .route("/feedback_summary", get(views::feedback_summary))
        .route("/file_complaint/{user_id}", get(views::file_complaint))
        .route("/officer_workload/{officer_id}", get(views::officer_workload))
        .route("/complaints_by_status", get(views::complaints_by_status))
}
