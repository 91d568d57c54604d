use super::*;

#[test]
fn validate_name_trims_and_accepts() {
    assert_eq!(validate_name("  My App  ").unwrap(), "My App");
    assert_eq!(validate_name("A").unwrap(), "A");
}

#[test]
fn validate_name_rejects_blank_names() {
    assert!(matches!(validate_name(""), Err(ApplicationError::EmptyName)));
    assert!(matches!(validate_name("   "), Err(ApplicationError::EmptyName)));
    assert!(matches!(validate_name("\t\n"), Err(ApplicationError::EmptyName)));
}

// =============================================================================
// LIVE DB TESTS (require DATABASE_URL; run with --features live-db-tests)
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::db;

    async fn test_pool() -> sqlx::PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        db::init_pool(&url).await.expect("database init failed")
    }

    fn unique_name(prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4())
    }

    #[tokio::test]
    async fn create_list_rename_delete_roundtrip() {
        let pool = test_pool().await;
        let name = unique_name("app");

        let created = create(&pool, &name).await.expect("create");
        assert_eq!(created.name, name);

        let listed = list(&pool).await.expect("list");
        assert!(listed.iter().any(|a| a.id == created.id));

        let renamed_to = unique_name("app");
        let renamed = rename(&pool, created.id, &renamed_to).await.expect("rename");
        assert_eq!(renamed.name, renamed_to);
        assert_eq!(get(&pool, created.id).await.expect("get").name, renamed_to);

        delete(&pool, created.id).await.expect("delete");
        assert!(matches!(
            get(&pool, created.id).await,
            Err(ApplicationError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected_case_insensitively() {
        let pool = test_pool().await;
        let name = unique_name("App");

        let created = create(&pool, &name).await.expect("create");
        let err = create(&pool, &name.to_lowercase()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::DuplicateName(_)));

        delete(&pool, created.id).await.expect("cleanup");
    }
}
