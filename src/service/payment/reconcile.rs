//! Applies confirmed payment events to local state.
//!
//! Webhook delivery is at-least-once and may be concurrent or out-of-order
//! relative to the checkout-creation call, so every handler is an idempotent
//! field assignment keyed by the ids the provider echoes back in event
//! metadata. Events that reference nothing locally are accepted and logged
//! rather than rejected.

use entity::sea_orm_active_enums::{ServerStatus, Tier};
use sea_orm::DatabaseConnection;

use crate::{
    data::{job::JobRepository, server::AcpServerRepository, submission::SubmissionRepository},
    error::AppError,
    model::server::CreateServerParams,
    service::{
        payment::event::{CheckoutSessionObject, PaymentEvent, SubscriptionObject},
        slug::SlugAllocator,
    },
    util::tags::string_array,
};

/// Metadata key carrying the job id on one-time checkouts.
const META_JOB_ID: &str = "jobId";
/// Metadata key carrying the submission id on subscription checkouts.
const META_SUBMISSION_ID: &str = "submissionId";
/// Metadata key carrying the server id on subscription lifecycle events.
const META_SERVER_ID: &str = "acpServerId";
/// Metadata key carrying the purchased tier.
const META_TIER: &str = "tier";

/// Attempts at inserting a deferred listing before giving up on slug races.
const MAX_CREATE_ATTEMPTS: u32 = 3;

pub struct PaymentReconciler<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentReconciler<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a verified event to local state.
    ///
    /// # Returns
    /// - `Ok(())` - Event applied, or accepted as a no-op
    /// - `Err(AppError)` - Database failure; the provider will redeliver
    pub async fn apply(&self, event: PaymentEvent) -> Result<(), AppError> {
        match event {
            PaymentEvent::CheckoutCompleted(session) if session.mode == "subscription" => {
                self.subscription_checkout_completed(session).await
            }
            PaymentEvent::CheckoutCompleted(session) => {
                self.job_checkout_completed(session).await
            }
            PaymentEvent::SubscriptionUpdated(subscription) => {
                self.subscription_changed(subscription).await
            }
            PaymentEvent::SubscriptionDeleted(subscription) => {
                self.subscription_deleted(subscription).await
            }
            PaymentEvent::InvoicePaymentFailed { invoice_id } => {
                tracing::warn!("Payment failed for invoice {}", invoice_id);
                Ok(())
            }
            PaymentEvent::Unhandled { kind } => {
                tracing::info!("Unhandled event type: {}", kind);
                Ok(())
            }
        }
    }

    /// One-time checkout completed: publish the referenced job.
    async fn job_checkout_completed(
        &self,
        session: CheckoutSessionObject,
    ) -> Result<(), AppError> {
        let Some(job_id) = session
            .metadata
            .get(META_JOB_ID)
            .and_then(|id| id.parse::<i32>().ok())
        else {
            tracing::warn!("Checkout session {} carries no job id", session.id);
            return Ok(());
        };

        let repo = JobRepository::new(self.db);
        if repo.find_by_id(job_id).await?.is_none() {
            tracing::warn!("Checkout session {} references unknown job {}", session.id, job_id);
            return Ok(());
        }

        let job = repo.mark_published(job_id, session.payment_intent).await?;
        tracing::info!("Job {} published after payment ({})", job.slug, session.id);

        Ok(())
    }

    /// Subscription checkout completed: approve the submission and perform
    /// the deferred listing creation.
    async fn subscription_checkout_completed(
        &self,
        session: CheckoutSessionObject,
    ) -> Result<(), AppError> {
        let Some(submission_id) = session
            .metadata
            .get(META_SUBMISSION_ID)
            .and_then(|id| id.parse::<i32>().ok())
        else {
            tracing::warn!("Checkout session {} carries no submission id", session.id);
            return Ok(());
        };

        let submissions = SubmissionRepository::new(self.db);
        let Some(submission) = submissions.find_by_id(submission_id).await? else {
            tracing::warn!(
                "Checkout session {} references unknown submission {}",
                session.id,
                submission_id
            );
            return Ok(());
        };

        // Redelivery after the listing already exists is a no-op.
        if submission.acp_server_id.is_some() {
            return Ok(());
        }

        let submission = submissions
            .approve(submission_id, Some(session.id.clone()), session.payment_intent)
            .await?;

        let tier = session
            .metadata
            .get(META_TIER)
            .and_then(|t| Tier::parse(t))
            .unwrap_or(submission.selected_tier);

        let server = self.create_listing_from_submission(&submission, tier).await?;
        submissions.link_server(submission_id, server.id).await?;

        tracing::info!(
            "Premium ACP server created: {} ({}) from submission {}",
            server.name,
            server.slug,
            submission_id
        );

        Ok(())
    }

    /// Creates the listing a paid submission was for, retrying allocation if
    /// a concurrent insert claims the slug first.
    async fn create_listing_from_submission(
        &self,
        submission: &entity::acp_submission::Model,
        tier: Tier,
    ) -> Result<entity::acp_server::Model, AppError> {
        let allocator = SlugAllocator::new(self.db);
        let servers = AcpServerRepository::new(self.db);
        let premium = tier.is_premium();

        let mut attempt = 0;
        loop {
            attempt += 1;
            let slug = allocator.allocate_server_slug(&submission.name).await?;

            let result = servers
                .create(CreateServerParams {
                    slug,
                    name: submission.name.clone(),
                    description: submission.description.clone(),
                    website: submission.website.clone(),
                    github_url: Some(submission.github_url.clone()),
                    logo_url: None,
                    primary_category_id: submission.category_id,
                    tags: string_array(&submission.tags),
                    protocol_support: string_array(&submission.protocol_support),
                    api_endpoint: None,
                    api_key_required: false,
                    submitter_name: Some(submission.submitter_name.clone()),
                    submitter_email: Some(submission.submitter_email.clone()),
                    submitter_company: submission.submitter_company.clone(),
                    status: ServerStatus::Active,
                    tier,
                    featured: premium,
                    verified: true,
                    stars: 0,
                    downloads: 0,
                    custom_profile: premium,
                    lead_generation: premium,
                    analytics_enabled: premium,
                    published_at: Some(chrono::Utc::now()),
                })
                .await;

            match result {
                Ok(server) => return Ok(server),
                Err(err) if attempt < MAX_CREATE_ATTEMPTS => {
                    if matches!(
                        err.sql_err(),
                        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
                    ) {
                        tracing::warn!(
                            "Slug race creating listing for submission {}, retrying",
                            submission.id
                        );
                        continue;
                    }
                    return Err(err.into());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Subscription upgraded or downgraded: re-derive tier and feature flags.
    async fn subscription_changed(
        &self,
        subscription: SubscriptionObject,
    ) -> Result<(), AppError> {
        let Some(server_id) = subscription
            .metadata
            .get(META_SERVER_ID)
            .and_then(|id| id.parse::<i32>().ok())
        else {
            tracing::warn!("Subscription {} carries no server id", subscription.id);
            return Ok(());
        };

        let repo = AcpServerRepository::new(self.db);
        if repo.find_by_id(server_id).await?.is_none() {
            tracing::warn!(
                "Subscription {} references unknown server {}",
                subscription.id,
                server_id
            );
            return Ok(());
        }

        let tier = subscription
            .metadata
            .get(META_TIER)
            .and_then(|t| Tier::parse(t))
            .unwrap_or(Tier::Pro);

        repo.update_tier_flags(server_id, tier, tier.is_premium())
            .await?;

        Ok(())
    }

    /// Subscription cancelled: downgrade to the free tier and clear premium
    /// flags.
    async fn subscription_deleted(
        &self,
        subscription: SubscriptionObject,
    ) -> Result<(), AppError> {
        let Some(server_id) = subscription
            .metadata
            .get(META_SERVER_ID)
            .and_then(|id| id.parse::<i32>().ok())
        else {
            tracing::warn!("Subscription {} carries no server id", subscription.id);
            return Ok(());
        };

        let repo = AcpServerRepository::new(self.db);
        if repo.find_by_id(server_id).await?.is_none() {
            tracing::warn!(
                "Subscription {} references unknown server {}",
                subscription.id,
                server_id
            );
            return Ok(());
        }

        repo.update_tier_flags(server_id, Tier::Free, false).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::{JobStatus, PaymentStatus, SubmissionStatus};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use std::collections::HashMap;
    use test_utils::{builder::TestBuilder, factory};

    fn checkout_session(
        mode: &str,
        metadata: Vec<(&str, String)>,
    ) -> CheckoutSessionObject {
        CheckoutSessionObject {
            id: "cs_test_1".to_string(),
            mode: mode.to_string(),
            payment_intent: Some("pi_test_1".to_string()),
            metadata: metadata
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    /// Verifies that a completed one-time checkout publishes the referenced
    /// job, and that redelivering the same event leaves the state unchanged.
    #[tokio::test]
    async fn checkout_completed_publishes_job_idempotently() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let job = factory::job::JobFactory::new(db)
            .status(JobStatus::PaymentPending)
            .payment_status(PaymentStatus::Unpaid)
            .featured(true)
            .tier(entity::sea_orm_active_enums::Tier::Featured)
            .build()
            .await?;

        let reconciler = PaymentReconciler::new(db);
        let event = PaymentEvent::CheckoutCompleted(checkout_session(
            "payment",
            vec![(META_JOB_ID, job.id.to_string())],
        ));
        reconciler.apply(event.clone()).await?;

        let published = entity::prelude::Job::find_by_id(job.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(published.status, JobStatus::Published);
        assert_eq!(published.payment_status, PaymentStatus::Paid);
        assert!(published.featured);
        assert_eq!(published.payment_ref, Some("pi_test_1".to_string()));
        let first_published_at = published.published_at.unwrap();

        reconciler.apply(event).await?;

        let republished = entity::prelude::Job::find_by_id(job.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(republished.status, JobStatus::Published);
        assert_eq!(republished.published_at, Some(first_published_at));

        Ok(())
    }

    /// Verifies that a checkout event without a job id is accepted without
    /// touching any record.
    #[tokio::test]
    async fn checkout_without_job_id_is_a_no_op() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let job = factory::job::JobFactory::new(db)
            .status(JobStatus::PaymentPending)
            .payment_status(PaymentStatus::Unpaid)
            .build()
            .await?;

        let reconciler = PaymentReconciler::new(db);
        reconciler
            .apply(PaymentEvent::CheckoutCompleted(CheckoutSessionObject {
                id: "cs_no_meta".to_string(),
                mode: "payment".to_string(),
                payment_intent: None,
                metadata: HashMap::new(),
            }))
            .await?;

        let unchanged = entity::prelude::Job::find_by_id(job.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(unchanged.status, JobStatus::PaymentPending);
        assert_eq!(unchanged.payment_status, PaymentStatus::Unpaid);

        Ok(())
    }

    /// Verifies the deferred listing creation: a subscription checkout
    /// approves the submission, creates the active listing with premium
    /// flags, and links the two records. Redelivery creates no second
    /// listing.
    #[tokio::test]
    async fn subscription_checkout_creates_listing_once() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let category = factory::category::create_category(db).await?;
        let submission = factory::acp_submission::AcpSubmissionFactory::new(db, category.id)
            .name("Ledger Agent")
            .build()
            .await?;

        let reconciler = PaymentReconciler::new(db);
        let event = PaymentEvent::CheckoutCompleted(checkout_session(
            "subscription",
            vec![
                (META_SUBMISSION_ID, submission.id.to_string()),
                (META_TIER, "featured".to_string()),
            ],
        ));
        reconciler.apply(event.clone()).await?;

        let approved = entity::prelude::AcpSubmission::find_by_id(submission.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(approved.status, SubmissionStatus::Approved);
        assert_eq!(approved.payment_status, PaymentStatus::Paid);
        assert!(approved.reviewed_at.is_some());
        let server_id = approved.acp_server_id.expect("listing linked");

        let server = entity::prelude::AcpServer::find_by_id(server_id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(server.slug, "ledger-agent");
        assert_eq!(server.status, ServerStatus::Active);
        assert_eq!(server.tier, Tier::Featured);
        assert!(server.featured);
        assert!(server.verified);
        assert!(server.custom_profile);
        assert!(server.published_at.is_some());

        reconciler.apply(event).await?;

        let total = entity::prelude::AcpServer::find().count(db).await?;
        assert_eq!(total, 1);

        Ok(())
    }

    /// Verifies that a cancelled subscription downgrades the listing to the
    /// free tier and clears the premium flags.
    #[tokio::test]
    async fn subscription_deleted_downgrades_listing() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let category = factory::category::create_category(db).await?;
        let server = factory::acp_server::AcpServerFactory::new(db, category.id)
            .tier(Tier::Pro)
            .featured(true)
            .build()
            .await?;

        let reconciler = PaymentReconciler::new(db);
        reconciler
            .apply(PaymentEvent::SubscriptionDeleted(SubscriptionObject {
                id: "sub_1".to_string(),
                metadata: HashMap::from([(
                    META_SERVER_ID.to_string(),
                    server.id.to_string(),
                )]),
            }))
            .await?;

        let downgraded = entity::prelude::AcpServer::find_by_id(server.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(downgraded.tier, Tier::Free);
        assert!(!downgraded.featured);
        assert!(!downgraded.custom_profile);
        assert!(!downgraded.lead_generation);
        assert!(!downgraded.analytics_enabled);

        Ok(())
    }

    /// Verifies that a subscription update re-derives tier and flags from the
    /// event metadata.
    #[tokio::test]
    async fn subscription_updated_applies_new_tier() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let category = factory::category::create_category(db).await?;
        let server = factory::acp_server::AcpServerFactory::new(db, category.id)
            .tier(Tier::Pro)
            .build()
            .await?;

        let reconciler = PaymentReconciler::new(db);
        reconciler
            .apply(PaymentEvent::SubscriptionUpdated(SubscriptionObject {
                id: "sub_2".to_string(),
                metadata: HashMap::from([
                    (META_SERVER_ID.to_string(), server.id.to_string()),
                    (META_TIER.to_string(), "featured".to_string()),
                ]),
            }))
            .await?;

        let updated = entity::prelude::AcpServer::find_by_id(server.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(updated.tier, Tier::Featured);
        assert!(updated.featured);
        assert!(updated.analytics_enabled);

        Ok(())
    }
}
