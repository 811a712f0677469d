use super::*;
use test_utils::factory::acp_server::AcpServerFactory;

/// Tests the ranking precedence chain: featured before tier before verified
/// before stars.
///
/// Expected: featured listing first regardless of the other fields
#[tokio::test]
async fn ranks_featured_above_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    // Deliberately strong on every lower-precedence field.
    let popular = AcpServerFactory::new(db, category.id)
        .name("Popular")
        .tier(Tier::Pro)
        .verified(true)
        .stars(99999)
        .build()
        .await?;
    let featured = AcpServerFactory::new(db, category.id)
        .name("Featured")
        .featured(true)
        .build()
        .await?;

    let repo = AcpServerRepository::new(db);
    let (results, total) = repo.search(&ServerFilter::default(), None).await?;

    assert_eq!(total, 2);
    assert_eq!(results[0].0.id, featured.id);
    assert_eq!(results[1].0.id, popular.id);

    Ok(())
}

/// Tests that the tier ordinal breaks ties among non-featured listings, and
/// stars break ties within a tier.
///
/// Expected: featured > pro > free, higher stars first within a tier
#[tokio::test]
async fn ranks_by_tier_then_stars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let free_low = AcpServerFactory::new(db, category.id)
        .stars(10)
        .build()
        .await?;
    let free_high = AcpServerFactory::new(db, category.id)
        .stars(500)
        .build()
        .await?;
    let pro = AcpServerFactory::new(db, category.id)
        .tier(Tier::Pro)
        .build()
        .await?;

    let repo = AcpServerRepository::new(db);
    let (results, _) = repo.search(&ServerFilter::default(), None).await?;

    let ids: Vec<i32> = results.iter().map(|(s, _)| s.id).collect();
    assert_eq!(ids, vec![pro.id, free_high.id, free_low.id]);

    Ok(())
}

/// Tests the "payments" search scenario with a category filter.
///
/// Only listings whose category matches AND whose name, description, or tag
/// set contains "payments" are returned, featured first.
///
/// Expected: two matches from the commerce category, featured one first
#[tokio::test]
async fn query_and_category_filters_compose() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let commerce = factory::category::create_category_with_slug(db, "commerce").await?;
    let other = factory::category::create_category_with_slug(db, "other").await?;

    let tagged = AcpServerFactory::new(db, commerce.id)
        .name("Ledger Agent")
        .tags(vec!["payments", "api"])
        .build()
        .await?;
    let named = AcpServerFactory::new(db, commerce.id)
        .name("Payments Hub")
        .featured(true)
        .build()
        .await?;
    // Matches the query but lives in the wrong category.
    AcpServerFactory::new(db, other.id)
        .name("Payments Elsewhere")
        .build()
        .await?;
    // Matches the category but not the query.
    AcpServerFactory::new(db, commerce.id)
        .name("Unrelated")
        .build()
        .await?;

    let repo = AcpServerRepository::new(db);
    let filter = ServerFilter {
        query: Some("payments".to_string()),
        ..Default::default()
    };
    let (results, total) = repo.search(&filter, Some(commerce.id)).await?;

    assert_eq!(total, 2);
    assert_eq!(results[0].0.id, named.id);
    assert_eq!(results[1].0.id, tagged.id);

    Ok(())
}

/// Tests that free-text matching is case-insensitive across name and tags.
///
/// Expected: uppercase query matches lowercase fields
#[tokio::test]
async fn matching_is_case_insensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    AcpServerFactory::new(db, category.id)
        .name("ledger agent")
        .tags(vec!["payments"])
        .build()
        .await?;

    let repo = AcpServerRepository::new(db);

    let (by_name, _) = repo
        .search(
            &ServerFilter {
                query: Some("LEDGER".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(by_name.len(), 1);

    let (by_tag, _) = repo
        .search(
            &ServerFilter {
                query: Some("PAYMENTS".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(by_tag.len(), 1);

    Ok(())
}

/// Tests that pending listings never reach the public search path.
///
/// Expected: only the active listing is returned
#[tokio::test]
async fn pending_listings_are_invisible() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let active = AcpServerFactory::new(db, category.id).build().await?;
    AcpServerFactory::new(db, category.id)
        .status(ServerStatus::Pending)
        .build()
        .await?;

    let repo = AcpServerRepository::new(db);
    let (results, total) = repo.search(&ServerFilter::default(), None).await?;

    assert_eq!(total, 1);
    assert_eq!(results[0].0.id, active.id);

    Ok(())
}

/// Tests pagination bounds and the total count.
///
/// Expected: page of `limit` rows, total independent of limit/offset
#[tokio::test]
async fn paginates_with_stable_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    for _ in 0..3 {
        AcpServerFactory::new(db, category.id).build().await?;
    }

    let repo = AcpServerRepository::new(db);

    let (page_one, total) = repo
        .search(
            &ServerFilter {
                limit: 2,
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(page_one.len(), 2);
    assert_eq!(total, 3);

    let (page_two, total) = repo
        .search(
            &ServerFilter {
                limit: 2,
                offset: 2,
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(page_two.len(), 1);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests that the search result carries the joined category.
///
/// Expected: category model present on each row
#[tokio::test]
async fn results_include_joined_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    AcpServerFactory::new(db, category.id).build().await?;

    let repo = AcpServerRepository::new(db);
    let (results, _) = repo.search(&ServerFilter::default(), None).await?;

    assert_eq!(
        results[0].1.as_ref().map(|c| c.id),
        Some(category.id)
    );

    Ok(())
}
