use super::*;

/// Tests the paid-publication transition.
///
/// Verifies that marking a payment-pending job published sets the payment
/// status, lifecycle status, publication timestamp, and payment reference.
///
/// Expected: Ok with job published
#[tokio::test]
async fn publishes_payment_pending_job() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let job = JobFactory::new(db)
        .status(JobStatus::PaymentPending)
        .payment_status(PaymentStatus::Unpaid)
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let published = repo
        .mark_published(job.id, Some("pi_test_1".to_string()))
        .await?;

    assert_eq!(published.status, JobStatus::Published);
    assert_eq!(published.payment_status, PaymentStatus::Paid);
    assert_eq!(published.payment_ref, Some("pi_test_1".to_string()));
    assert!(published.published_at.is_some());

    Ok(())
}

/// Tests that re-publishing keeps the original publication timestamp.
///
/// Expected: second call leaves `published_at` untouched
#[tokio::test]
async fn publishing_twice_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let job = JobFactory::new(db)
        .status(JobStatus::PaymentPending)
        .payment_status(PaymentStatus::Unpaid)
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let first = repo
        .mark_published(job.id, Some("pi_test_1".to_string()))
        .await?;
    let second = repo
        .mark_published(job.id, Some("pi_test_1".to_string()))
        .await?;

    assert_eq!(first.published_at, second.published_at);
    assert_eq!(second.payment_ref, Some("pi_test_1".to_string()));

    Ok(())
}

/// Tests the administrative approval path.
///
/// Verifies that setting the status to published without an explicit
/// timestamp stamps `published_at`.
///
/// Expected: Ok with publication timestamp set
#[tokio::test]
async fn admin_update_stamps_published_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let job = JobFactory::new(db).status(JobStatus::Pending).build().await?;

    let repo = JobRepository::new(db);
    let updated = repo
        .update_admin(job.id, Some(JobStatus::Published), None)
        .await?;

    assert_eq!(updated.status, JobStatus::Published);
    assert!(updated.published_at.is_some());

    Ok(())
}

/// Tests deleting a job posting.
///
/// Expected: true for an existing record, false afterwards
#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let job = JobFactory::new(db).build().await?;

    let repo = JobRepository::new(db);
    assert!(repo.delete(job.id).await?);
    assert!(!repo.delete(job.id).await?);
    assert!(repo.find_by_id(job.id).await?.is_none());

    Ok(())
}
