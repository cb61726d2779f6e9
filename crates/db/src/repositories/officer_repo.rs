//! Repository for the `officers` table.

use sqlx::PgPool;

use civicdesk_core::types::DbId;

use crate::models::officer::Officer;

const COLUMNS: &str = "officer_id, user_id, department, designation, created_at";

/// Provides read operations for officer profiles.
///
/// Officer rows are seeded administratively (there is no create endpoint),
/// so this repository only reads.
pub struct OfficerRepo;

impl OfficerRepo {
    /// List all officers in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Officer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM officers ORDER BY officer_id");
        sqlx::query_as::<_, Officer>(&query).fetch_all(pool).await
    }

    /// Find an officer by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Officer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM officers WHERE officer_id = $1");
        sqlx::query_as::<_, Officer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
