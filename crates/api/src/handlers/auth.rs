//! Handler for the `/auth` resource (registration).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use civicdesk_core::error::CoreError;
use civicdesk_core::roles::{is_valid_role, ALLOWED_ROLES};
use civicdesk_db::models::user::{CreateUser, RegisterUser, UserResponse};
use civicdesk_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
///
/// Self-service registration: the plaintext password is hashed with Argon2id
/// before storage. Email uniqueness is checked explicitly up front so the
/// common duplicate case reports a clean 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    // 1. Validate the payload.
    input.validate()?;
    if !is_valid_role(&input.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Role must be one of: {}",
            ALLOWED_ROLES.join(", ")
        ))));
    }

    // 2. Check whether the email is already taken.
    if UserRepo::find_id_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    // 3. Hash the password. NEVER store plaintext.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // 4. Insert and return the created row.
    let create = CreateUser {
        name: input.name,
        email: input.email,
        phone: input.phone,
        role: input.role,
        password_hash,
    };
    let user = UserRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
