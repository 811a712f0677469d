use super::*;

/// Tests creating a server listing from parameters.
///
/// Verifies that the repository persists the descriptive fields, tag set,
/// and lifecycle fields, and that the record is retrievable by slug.
///
/// Expected: Ok with server created
#[tokio::test]
async fn creates_server_from_params() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let mut params = active_server_params("ledger-agent", "Ledger Agent", category.id);
    params.tags = vec!["payments".to_string(), "api".to_string()];
    params.tier = Tier::Pro;
    params.featured = true;
    params.verified = true;

    let repo = AcpServerRepository::new(db);
    let server = repo.create(params).await?;

    assert_eq!(server.slug, "ledger-agent");
    assert_eq!(server.name, "Ledger Agent");
    assert_eq!(server.primary_category_id, category.id);
    assert_eq!(server.tags, serde_json::json!(["payments", "api"]));
    assert_eq!(server.status, ServerStatus::Active);
    assert_eq!(server.tier, Tier::Pro);
    assert!(server.featured);
    assert!(server.verified);

    let found = repo.find_by_slug("ledger-agent").await?;
    assert_eq!(found.map(|s| s.id), Some(server.id));

    Ok(())
}

/// Tests slug existence checks.
///
/// Expected: false before insert, true after
#[tokio::test]
async fn slug_exists_reflects_inserts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let repo = AcpServerRepository::new(db);

    assert!(!repo.slug_exists("ledger-agent").await?);

    repo.create(active_server_params("ledger-agent", "Ledger Agent", category.id))
        .await?;

    assert!(repo.slug_exists("ledger-agent").await?);

    Ok(())
}

/// Tests that inserting a duplicate slug violates the unique constraint.
///
/// The store-level constraint is the backstop for allocator races; the error
/// must be recognizable so callers can retry with a fresh candidate.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn duplicate_slug_is_a_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let repo = AcpServerRepository::new(db);

    repo.create(active_server_params("ledger-agent", "Ledger Agent", category.id))
        .await?;

    let err = repo
        .create(active_server_params("ledger-agent", "Ledger Agent", category.id))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
