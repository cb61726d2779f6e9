//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use civicdesk_core::error::CoreError;
use civicdesk_core::roles::{is_valid_role, ALLOWED_ROLES};
use civicdesk_core::types::DbId;
use civicdesk_db::models::user::{CreateUser, UserResponse};
use civicdesk_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// POST /api/users
///
/// Takes an already-hashed credential. A duplicate email surfaces as 409
/// through the `uq_users_email` constraint.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    if !is_valid_role(&input.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Role must be one of: {}",
            ALLOWED_ROLES.join(", ")
        ))));
    }

    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /api/users/{id}
///
/// Unconditional: succeeds with 204 whether or not the row existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    UserRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
