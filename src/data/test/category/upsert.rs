use super::*;

/// Tests that upserting by slug creates a row on first sight and refreshes
/// display metadata afterwards.
///
/// Expected: same row id across both calls, updated name
#[tokio::test]
async fn upsert_is_keyed_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    let created = repo
        .upsert(
            "commerce".to_string(),
            "Commerce".to_string(),
            "Commerce tools".to_string(),
            "💳".to_string(),
            "#10b981".to_string(),
            1,
        )
        .await?;

    let updated = repo
        .upsert(
            "commerce".to_string(),
            "Commerce & Transactions".to_string(),
            "Commerce tools".to_string(),
            "💳".to_string(),
            "#10b981".to_string(),
            2,
        )
        .await?;

    assert_eq!(created.id, updated.id);
    assert_eq!(updated.name, "Commerce & Transactions");
    assert_eq!(updated.sort_order, 2);

    Ok(())
}

/// Tests slug and id lookups.
///
/// Expected: both return the created row
#[tokio::test]
async fn finds_by_slug_and_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category_with_slug(db, "commerce").await?;

    let repo = CategoryRepository::new(db);
    assert_eq!(
        repo.find_by_slug("commerce").await?.map(|c| c.id),
        Some(category.id)
    );
    assert_eq!(
        repo.find_by_id(category.id).await?.map(|c| c.slug),
        Some("commerce".to_string())
    );
    assert!(repo.find_by_slug("missing").await?.is_none());

    Ok(())
}
