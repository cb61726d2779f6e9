//! Schema-catalog access for the admin table dump.
//!
//! The dump operates over schema-unknown tables, so rows come back as
//! untyped JSON built by `jsonb_agg` on the server rather than as typed
//! records. Table names read from the catalog are interpolated into the
//! per-table query through [`quote_ident`], never raw.

use sqlx::PgPool;

use civicdesk_core::pagination::DUMP_ROWS_PER_TABLE;

/// Read access to the storage schema catalog.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Names of all base tables in the public schema, alphabetical.
    pub async fn list_base_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT table_name FROM information_schema.tables
             WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
             ORDER BY table_name",
        )
        .fetch_all(pool)
        .await
    }

    /// Up to `limit` rows of one table as a JSON array of objects.
    pub async fn dump_table(
        pool: &PgPool,
        table: &str,
        limit: i64,
    ) -> Result<serde_json::Value, sqlx::Error> {
        let query = format!(
            "SELECT COALESCE(jsonb_agg(t), '[]'::jsonb)
             FROM (SELECT * FROM {} LIMIT $1) t",
            quote_ident(table)
        );
        sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(limit)
            .fetch_one(pool)
            .await
    }

    /// Dump every base table, keyed by table name. Each table is capped at
    /// [`DUMP_ROWS_PER_TABLE`] rows; the dump is not paginated beyond that.
    pub async fn dump_all(
        pool: &PgPool,
    ) -> Result<serde_json::Map<String, serde_json::Value>, sqlx::Error> {
        let mut dump = serde_json::Map::new();
        for table in Self::list_base_tables(pool).await? {
            let rows = Self::dump_table(pool, &table, DUMP_ROWS_PER_TABLE).await?;
            dump.insert(table, rows);
        }
        Ok(dump)
    }
}

/// Quote a catalog-sourced identifier for interpolation into a statement:
/// wrap in double quotes and double any embedded double quote.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
