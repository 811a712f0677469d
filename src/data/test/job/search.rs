use super::*;

/// Tests the job ranking precedence chain.
///
/// Expected order: featured, then tier, then verified, then urgent, then
/// highlighted, then most recently published
#[tokio::test]
async fn ranks_by_the_fixed_precedence_chain() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plain = JobFactory::new(db).build().await?;
    let urgent = JobFactory::new(db).urgent(true).build().await?;
    let verified = JobFactory::new(db).verified(true).build().await?;
    let featured = JobFactory::new(db)
        .featured(true)
        .tier(Tier::Featured)
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let (results, total) = repo.search(&JobFilter::default(), Utc::now()).await?;

    assert_eq!(total, 4);
    let ids: Vec<i32> = results.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![featured.id, verified.id, urgent.id, plain.id]);

    Ok(())
}

/// Tests that the categorical filters compose by logical AND.
///
/// Expected: only the job matching location substring, type, work location,
/// and tier survives all filters together
#[tokio::test]
async fn categorical_filters_compose() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let match_all = JobFactory::new(db)
        .location("Berlin, Germany")
        .job_type("Contract")
        .work_location("Remote")
        .tier(Tier::Featured)
        .featured(true)
        .build()
        .await?;
    JobFactory::new(db)
        .location("Berlin, Germany")
        .job_type("Full Time")
        .build()
        .await?;
    JobFactory::new(db)
        .location("Lisbon")
        .job_type("Contract")
        .work_location("Remote")
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let filter = JobFilter {
        location: Some("berlin".to_string()),
        job_type: Some("Contract".to_string()),
        work_location: Some("Remote".to_string()),
        tier: Some(Tier::Featured),
        ..Default::default()
    };
    let (results, total) = repo.search(&filter, Utc::now()).await?;

    assert_eq!(total, 1);
    assert_eq!(results[0].id, match_all.id);

    Ok(())
}

/// Tests free-text matching across title, company, description, and tags.
///
/// Expected: each angle matches independently
#[tokio::test]
async fn query_matches_title_company_description_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    JobFactory::new(db).job_title("Payments Engineer").build().await?;
    JobFactory::new(db)
        .company_name("Payments Inc")
        .build()
        .await?;
    JobFactory::new(db)
        .description("Work on payments rails.")
        .build()
        .await?;
    JobFactory::new(db).tags(vec!["payments"]).build().await?;
    JobFactory::new(db).job_title("Gardener").build().await?;

    let repo = JobRepository::new(db);
    let filter = JobFilter {
        query: Some("payments".to_string()),
        ..Default::default()
    };
    let (_, total) = repo.search(&filter, Utc::now()).await?;

    assert_eq!(total, 4);

    Ok(())
}

/// Tests that expired and non-published jobs are filtered from public reads.
///
/// Expected: only the live job is visible
#[tokio::test]
async fn expired_and_pending_jobs_are_invisible() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let live = JobFactory::new(db).build().await?;
    JobFactory::new(db)
        .expires_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;
    JobFactory::new(db).status(JobStatus::Pending).build().await?;
    JobFactory::new(db)
        .status(JobStatus::PaymentPending)
        .payment_status(PaymentStatus::Unpaid)
        .build()
        .await?;

    let repo = JobRepository::new(db);

    let (results, total) = repo.search(&JobFilter::default(), Utc::now()).await?;
    assert_eq!(total, 1);
    assert_eq!(results[0].id, live.id);

    let listed = repo.list_published(Utc::now()).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, live.id);

    Ok(())
}

/// Tests that a job with no expiry never ages out.
///
/// Expected: visible regardless of the read time
#[tokio::test]
async fn jobs_without_expiry_stay_visible() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    JobFactory::new(db).expires_at(None).build().await?;

    let repo = JobRepository::new(db);
    let far_future = Utc::now() + Duration::days(3650);
    let (_, total) = repo.search(&JobFilter::default(), far_future).await?;

    assert_eq!(total, 1);

    Ok(())
}
