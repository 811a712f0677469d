use super::*;

fn integration_request(email: &str) -> CreateServiceRequestParams {
    CreateServiceRequestParams {
        name: "Ada".to_string(),
        email: email.to_string(),
        company: Some("Acme".to_string()),
        phone: None,
        project_type: "integration".to_string(),
        description: "Wire our storefront into the agent network.".to_string(),
        budget: Some("10-25k".to_string()),
        timeline: None,
    }
}

/// Tests creating a service request.
///
/// Verifies that new requests land in the "new" intake status with their
/// contact and project fields persisted.
///
/// Expected: Ok with request created
#[tokio::test]
async fn creates_request_in_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServiceRequestRepository::new(db);
    let request = repo.create(integration_request("ada@acme.com")).await?;

    assert_eq!(request.status, "new");
    assert_eq!(request.email, "ada@acme.com");
    assert_eq!(request.project_type, "integration");

    Ok(())
}

/// Tests that requests list newest first.
///
/// Expected: most recent request leads
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServiceRequestRepository::new(db);
    repo.create(integration_request("first@acme.com")).await?;
    let second = repo.create(integration_request("second@acme.com")).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);

    Ok(())
}
