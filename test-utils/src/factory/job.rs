//! Job factory for creating test job postings.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{JobStatus, PaymentStatus, Tier};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test jobs with customizable fields.
///
/// Defaults produce a published, paid, standard-tier posting expiring 30 days
/// from creation. Jobs built with `JobStatus::Published` get `published_at`
/// set automatically.
pub struct JobFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    job_title: String,
    company_name: String,
    location: Option<String>,
    work_location: String,
    job_type: String,
    description: String,
    status: JobStatus,
    tier: Tier,
    featured: bool,
    verified: bool,
    urgent: bool,
    highlighted: bool,
    payment_status: PaymentStatus,
    tags: Vec<String>,
    expires_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> JobFactory<'a> {
    /// Creates a new JobFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"job-{id}"` where id is auto-incremented
    /// - job_title: `"Job {id}"`, company_name: `"Company {id}"`
    /// - status: `Published`, tier: `Standard`, payment_status: `Paid`
    /// - expires_at: 30 days from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("job-{}", id),
            job_title: format!("Job {}", id),
            company_name: format!("Company {}", id),
            location: None,
            work_location: "On-site".to_string(),
            job_type: "Full Time".to_string(),
            description: format!("Job {} description", id),
            status: JobStatus::Published,
            tier: Tier::Standard,
            featured: false,
            verified: false,
            urgent: false,
            highlighted: false,
            payment_status: PaymentStatus::Paid,
            tags: Vec::new(),
            expires_at: Some(Utc::now() + Duration::days(30)),
        }
    }

    /// Sets the slug for the job.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the job title.
    pub fn job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    /// Sets the company name.
    pub fn company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    /// Sets the location string.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the work location kind (e.g. "Remote").
    pub fn work_location(mut self, work_location: impl Into<String>) -> Self {
        self.work_location = work_location.into();
        self
    }

    /// Sets the job type (e.g. "Contract").
    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    /// Sets the description text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the paid tier.
    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the featured flag.
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Sets the verified flag.
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Sets the urgent flag.
    pub fn urgent(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }

    /// Sets the highlighted flag.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Sets the payment status.
    pub fn payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    /// Sets the tag tokens.
    pub fn tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(String::from).collect();
        self
    }

    /// Sets the expiry timestamp. `None` means the posting never expires.
    pub fn expires_at(mut self, expires_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the job entity into the database.
    pub async fn build(self) -> Result<entity::job::Model, DbErr> {
        let now = Utc::now();
        let published_at = match self.status {
            JobStatus::Published => Some(now),
            _ => None,
        };

        entity::job::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            job_title: ActiveValue::Set(self.job_title),
            company_name: ActiveValue::Set(self.company_name),
            company_logo_url: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            work_location: ActiveValue::Set(self.work_location),
            job_type: ActiveValue::Set(self.job_type),
            salary_range: ActiveValue::Set(None),
            application_url: ActiveValue::Set("https://example.com/apply".to_string()),
            description: ActiveValue::Set(self.description),
            requirements: ActiveValue::Set(None),
            benefits: ActiveValue::Set(None),
            contact_email: ActiveValue::Set("jobs@example.com".to_string()),
            company_website: ActiveValue::Set(None),
            tags: ActiveValue::Set(serde_json::json!(self.tags)),
            status: ActiveValue::Set(self.status),
            tier: ActiveValue::Set(self.tier),
            featured: ActiveValue::Set(self.featured),
            verified: ActiveValue::Set(self.verified),
            urgent: ActiveValue::Set(self.urgent),
            highlighted: ActiveValue::Set(self.highlighted),
            payment_status: ActiveValue::Set(self.payment_status),
            payment_amount: ActiveValue::Set(None),
            payment_session_id: ActiveValue::Set(None),
            payment_ref: ActiveValue::Set(None),
            published_at: ActiveValue::Set(published_at),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published job with default values.
///
/// Shorthand for `JobFactory::new(db).build().await`.
pub async fn create_job(db: &DatabaseConnection) -> Result<entity::job::Model, DbErr> {
    JobFactory::new(db).build().await
}
