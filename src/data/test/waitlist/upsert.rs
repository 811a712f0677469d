use super::*;

/// Tests the duplicate-signup behavior.
///
/// A second signup with the same email updates tools, consent, and
/// `updated_at` on the existing row instead of creating a duplicate.
///
/// Expected: one row, refreshed fields, advanced `updated_at`
#[tokio::test]
async fn duplicate_email_updates_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WaitlistRepository::new(db);

    let first = repo
        .upsert("a@acme.com".to_string(), None, false)
        .await?;

    let second = repo
        .upsert(
            "a@acme.com".to_string(),
            Some("ledger, copilot".to_string()),
            true,
        )
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.tools, Some("ledger, copilot".to_string()));
    assert!(second.consent);
    assert!(second.updated_at >= first.updated_at);

    let total = entity::prelude::WaitlistEntry::find().count(db).await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests that distinct emails create distinct rows, listed newest first.
///
/// Expected: two rows
#[tokio::test]
async fn distinct_emails_create_distinct_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WaitlistRepository::new(db);
    repo.upsert("a@acme.com".to_string(), None, false).await?;
    repo.upsert("b@acme.com".to_string(), None, true).await?;

    let entries = repo.get_all().await?;
    assert_eq!(entries.len(), 2);

    Ok(())
}
