use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    kurort_db::health_check(&pool).await.unwrap();

    // Roles are seeded by the first migration.
    let roles = kurort_db::repositories::RoleRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["admin", "manager", "patient"]);

    // All content and social tables exist and start empty.
    let tables = [
        "users",
        "sessions",
        "banners",
        "faqs",
        "offers",
        "showcase_rooms",
        "awards",
        "service_categories",
        "about_pages",
        "moods",
        "friendships",
        "patient_messages",
        "leads",
        "manager_rotation",
        "chats",
        "chat_messages",
        "events",
        "notifications",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Unique constraints carry the `uq_` prefix the API error mapper keys on.
#[sqlx::test(migrations = "./migrations")]
async fn test_unique_constraint_naming(pool: PgPool) {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT conname FROM pg_constraint
         WHERE contype = 'u' AND connamespace = 'public'::regnamespace
         ORDER BY conname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!names.is_empty());
    for name in &names {
        assert!(
            name.starts_with("uq_"),
            "unique constraint {name} should be prefixed uq_"
        );
    }
}
