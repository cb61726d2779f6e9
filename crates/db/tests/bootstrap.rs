use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify the schema objects exist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    civicdesk_db::health_check(&pool).await.unwrap();

    // Every domain table must come up empty but queryable.
    let tables = [
        "users",
        "complaints",
        "officers",
        "complaintevidence",
        "complaintassignments",
        "complaintactions",
        "feedback",
        "auditlog",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty, got {} rows", count.0);
    }
}

/// The summary views are created and selectable right after migration.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_views_exist(pool: PgPool) {
    for view in ["complaintsummary", "feedbacksummary"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {view}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{view} query failed: {e}"));
        assert_eq!(count.0, 0);
    }
}

/// The stored functions are created and callable right after migration.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sql_functions_exist(pool: PgPool) {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT proname FROM pg_proc
         JOIN pg_namespace n ON n.oid = pronamespace
         WHERE n.nspname = 'public'
           AND proname IN ('file_complaint', 'officer_workload', 'complaints_by_status', 'audit_row_change')
         ORDER BY proname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = rows.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(
        names,
        ["audit_row_change", "complaints_by_status", "file_complaint", "officer_workload"]
    );

    // Both read-only functions run against the empty schema.
    let workload: Vec<(i64,)> = sqlx::query_as("SELECT complaint_id FROM officer_workload(1)")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert!(workload.is_empty());

    let by_status: Vec<(i64,)> =
        sqlx::query_as("SELECT complaint_id FROM complaints_by_status('Pending')")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert!(by_status.is_empty());
}

/// Every audited table has its row-change trigger attached.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_audit_triggers_attached(pool: PgPool) {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT c.relname
         FROM pg_trigger t
         JOIN pg_class c ON c.oid = t.tgrelid
         WHERE t.tgname LIKE 'trg_audit_%' AND NOT t.tgisinternal
         ORDER BY c.relname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let tables: Vec<&str> = rows.iter().map(|(t,)| t.as_str()).collect();
    assert_eq!(
        tables,
        [
            "complaintactions",
            "complaintassignments",
            "complaintevidence",
            "complaints",
            "feedback",
            "officers",
            "users",
        ]
    );
}
