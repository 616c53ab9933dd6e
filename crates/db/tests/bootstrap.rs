use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify every table exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    coachhub_db::health_check(&pool).await.unwrap();

    let tables = [
        "admins",
        "courses",
        "videos",
        "audio_books",
        "study_materials",
        "magazines",
        "crosswords",
        "puzzle_sets",
        "webinar_cards",
        "enquiries",
        "contacts",
        "doubts",
        "feedback",
        "meeting_requests",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}
