use super::*;

/// Tests that categories list in display sort order, not insertion order.
///
/// Expected: ascending by sort_order
#[tokio::test]
async fn lists_in_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let third = factory::category::CategoryFactory::new(db)
        .sort_order(3)
        .build()
        .await?;
    let first = factory::category::CategoryFactory::new(db)
        .sort_order(1)
        .build()
        .await?;
    let second = factory::category::CategoryFactory::new(db)
        .sort_order(2)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let all = repo.get_all().await?;

    let ids: Vec<i32> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
