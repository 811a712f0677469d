use super::*;

/// Tests the approval transition after a confirmed payment.
///
/// Verifies that approval marks the submission approved and paid, records
/// the session and payment references, and stamps `reviewed_at`.
///
/// Expected: Ok with submission approved
#[tokio::test]
async fn approves_submission_with_payment_references() -> Result<(), DbErr> {
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

    let approved = repo
        .approve(
            submission.id,
            Some("cs_test_1".to_string()),
            Some("pi_test_1".to_string()),
        )
        .await?;

    assert_eq!(approved.status, SubmissionStatus::Approved);
    assert_eq!(approved.payment_status, PaymentStatus::Paid);
    assert_eq!(approved.payment_session_id, Some("cs_test_1".to_string()));
    assert_eq!(approved.payment_ref, Some("pi_test_1".to_string()));
    assert!(approved.reviewed_at.is_some());

    Ok(())
}

/// Tests that approving twice keeps the original review timestamp.
///
/// Expected: second call leaves `reviewed_at` untouched
#[tokio::test]
async fn approving_twice_is_idempotent() -> Result<(), DbErr> {
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

    let first = repo.approve(submission.id, None, None).await?;
    let second = repo.approve(submission.id, None, None).await?;

    assert_eq!(first.reviewed_at, second.reviewed_at);
    assert_eq!(second.status, SubmissionStatus::Approved);

    Ok(())
}

/// Tests linking the listing created from a submission.
///
/// Expected: foreign key set to the listing id
#[tokio::test]
async fn links_created_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let server = factory::acp_server::create_server(db, category.id).await?;

    let repo = SubmissionRepository::new(db);
    let submission = repo
        .create(pro_submission_params("Ledger Agent", "ada@example.com", category.id))
        .await?;

    let linked = repo.link_server(submission.id, server.id).await?;
    assert_eq!(linked.acp_server_id, Some(server.id));

    Ok(())
}

/// Tests approving a missing submission.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn approving_missing_submission_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubmissionRepository::new(db);
    let err = repo.approve(9999, None, None).await.unwrap_err();

    assert!(matches!(err, DbErr::RecordNotFound(_)));

    Ok(())
}
