pub mod actions;
pub mod assignments;
pub mod audit;
pub mod auth;
pub mod complaints;
pub mod database;
pub mod evidence;
pub mod feedback;
pub mod health;
pub mod officers;
pub mod users;
pub mod views;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                            list, create
/// /users/{id}                       get, delete
///
/// /complaints                       list (?status=&limit=), create
/// /complaints/stats                 per-status counts
/// /complaints/categories            distinct categories
/// /complaints/{id}                  get, update content, delete
/// /complaints/{id}/status           update status (PUT)
///
/// /evidence                         list (?limit=), create
/// /evidence/{id}                    delete
///
/// /officers                         list
/// /officers/{id}                    get
///
/// /assignments                      list, create
///
/// /actions                          list, create
///
/// /feedback                         list (?limit=), create
/// /feedback/{id}                    get
///
/// /audit                            list (?limit=)
///
/// /database                         dump every base table (admin/debug)
///
/// /auth/register                    register (hashes the password)
///
/// /views/complaint_summary          complaintsummary view (?limit=)
/// /views/feedback_summary           feedbacksummary view (?limit=)
/// /views/file_complaint/{user_id}   file_complaint() bridge
/// /views/officer_workload/{id}      officer_workload() bridge
/// /views/complaints_by_status       complaints_by_status() bridge
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account records and self-service registration.
        .nest("/users", users::router())
        .nest("/auth", auth::router())
        // The complaint lifecycle and its satellite records.
        .nest("/complaints", complaints::router())
        .nest("/evidence", evidence::router())
        .nest("/officers", officers::router())
        .nest("/assignments", assignments::router())
        .nest("/actions", actions::router())
        .nest("/feedback", feedback::router())
        // Trigger-populated change history.
        .nest("/audit", audit::router())
        // Admin/debug whole-schema dump.
        .nest("/database", database::router())
        // Summary views and SQL function bridges.
        .nest("/views", views::router())
}
