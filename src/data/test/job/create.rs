use super::*;
use crate::model::job::CreateJobParams;

fn pending_job_params(slug: &str) -> CreateJobParams {
    CreateJobParams {
        slug: slug.to_string(),
        job_title: "Engineer".to_string(),
        company_name: "Acme".to_string(),
        company_logo_url: None,
        location: Some("Berlin".to_string()),
        work_location: "On-site".to_string(),
        job_type: "Full Time".to_string(),
        salary_range: None,
        application_url: "https://acme.com/apply".to_string(),
        description: "Build things.".to_string(),
        requirements: None,
        benefits: None,
        contact_email: "a@acme.com".to_string(),
        company_website: None,
        tags: vec!["rust".to_string()],
        status: JobStatus::Pending,
        tier: Tier::Free,
        featured: false,
        payment_status: PaymentStatus::Unpaid,
        payment_amount: None,
        expires_at: Some(Utc::now() + Duration::days(30)),
    }
}

/// Tests creating a job posting from parameters.
///
/// Verifies that the repository persists the descriptive fields, lifecycle
/// fields, and tag set, and that `published_at` stays unset for a pending
/// record.
///
/// Expected: Ok with job created
#[tokio::test]
async fn creates_job_from_params() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobRepository::new(db);
    let job = repo.create(pending_job_params("engineer-acme-x1y2z3")).await?;

    assert_eq!(job.slug, "engineer-acme-x1y2z3");
    assert_eq!(job.job_title, "Engineer");
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.payment_status, PaymentStatus::Unpaid);
    assert_eq!(job.tags, serde_json::json!(["rust"]));
    assert!(job.published_at.is_none());
    assert!(job.expires_at.is_some());

    let found = repo.find_by_slug("engineer-acme-x1y2z3").await?;
    assert_eq!(found.map(|j| j.id), Some(job.id));

    Ok(())
}

/// Tests that inserting a duplicate slug violates the unique constraint.
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

    let repo = JobRepository::new(db);
    repo.create(pending_job_params("engineer-acme-x1y2z3")).await?;

    let err = repo
        .create(pending_job_params("engineer-acme-x1y2z3"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
