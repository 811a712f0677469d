use super::*;

/// Tests creating a submission from parameters.
///
/// Verifies that new submissions start pending and unpaid with no linked
/// listing.
///
/// Expected: Ok with submission created
#[tokio::test]
async fn creates_pending_unpaid_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = SubmissionRepository::new(db);
    let submission = repo
        .create(pro_submission_params("Ledger Agent", "ada@example.com", category.id))
        .await?;

    assert_eq!(submission.name, "Ledger Agent");
    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert_eq!(submission.payment_status, PaymentStatus::Unpaid);
    assert_eq!(submission.selected_tier, Tier::Pro);
    assert!(submission.acp_server_id.is_none());
    assert!(submission.reviewed_at.is_none());

    Ok(())
}

/// Tests looking up the most recent submission for an email.
///
/// Expected: the later submission wins
#[tokio::test]
async fn finds_latest_submission_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = SubmissionRepository::new(db);
    repo.create(pro_submission_params("First", "ada@example.com", category.id))
        .await?;
    let second = repo
        .create(pro_submission_params("Second", "ada@example.com", category.id))
        .await?;

    let found = repo.find_latest_by_email("ada@example.com").await?;
    assert_eq!(found.map(|s| s.id), Some(second.id));

    assert!(repo.find_latest_by_email("nobody@example.com").await?.is_none());

    Ok(())
}

/// Tests storing the checkout session reference.
///
/// Expected: session id and amount persisted
#[tokio::test]
async fn stores_payment_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = SubmissionRepository::new(db);
    let submission = repo
        .create(pro_submission_params("Ledger Agent", "ada@example.com", category.id))
        .await?;

    let updated = repo
        .set_payment_session(submission.id, "cs_test_1".to_string(), 4900)
        .await?;

    assert_eq!(updated.payment_session_id, Some("cs_test_1".to_string()));
    assert_eq!(updated.amount, Some(4900));

    Ok(())
}
