//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use civicdesk_core::roles::ROLE_CITIZEN;
use civicdesk_core::types::{DbId, Timestamp};

/// Safe user representation for API responses (no password hash).
///
/// The hash is write-only from the application's point of view: the insert
/// is the single statement that touches `password_hash`, and every select
/// names these columns instead of fetching the hash and throwing it away.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserResponse {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for creating a user whose credential is already hashed.
///
/// Role membership is checked by the handler against
/// [`civicdesk_core::roles::ALLOWED_ROLES`].
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    pub password_hash: String,
}

/// DTO for self-service registration. Carries a plaintext password which the
/// API hashes before storage.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    pub password: String,
}

fn default_role() -> String {
    ROLE_CITIZEN.to_string()
}
