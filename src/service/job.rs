use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{JobStatus, PaymentStatus, Tier};
use sea_orm::DatabaseConnection;

use crate::{
    data::job::JobRepository,
    error::{payment::PaymentError, AppError},
    model::job::{
        CheckoutJobDto, CheckoutJobResponseDto, CreateJobParams, JobDto, JobFilter, JobSearchDto,
        JobSummaryDto, PostJobDto, PostJobResponseDto, UpdateJobDto, VerifyPaymentResponseDto,
    },
    service::{
        payment::{CheckoutMode, CheckoutSessionParams, PaymentClient},
        slug::job_slug,
    },
    util::{
        tags::normalize_tags,
        validate::{is_valid_email, normalize_application_url},
    },
};

/// Listings stay visible for 30 days from creation.
const LISTING_WINDOW_DAYS: i64 = 30;

/// One-time price of a standard listing, in cents.
const STANDARD_PRICE_CENTS: i32 = 4900;

/// One-time price of a featured listing, in cents.
const FEATURED_PRICE_CENTS: i32 = 12900;

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

/// Required job fields after validation and normalization.
struct ValidatedJob {
    job_title: String,
    company_name: String,
    contact_email: String,
    application_url: String,
    description: String,
}

impl<'a> JobService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a free job: the record is created in `pending` status and stays
    /// invisible to the public until an administrator approves it.
    ///
    /// # Returns
    /// - `Ok(PostJobResponseDto)` - Created record's id and slug
    /// - `Err(AppError::BadRequest)` - Missing or malformed fields
    /// - `Err(AppError::Conflict)` - Slug collision that the random suffix
    ///   did not avoid
    pub async fn post_free(&self, dto: PostJobDto) -> Result<PostJobResponseDto, AppError> {
        let validated = Self::validate_detailed(&dto)?;
        let params = Self::build_params(
            &dto,
            validated,
            JobStatus::Pending,
            Tier::Free,
            false,
            None,
        )?;

        let repo = JobRepository::new(self.db);
        let job = repo.create(params).await.map_err(|err| {
            if matches!(
                err.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ) {
                AppError::Conflict("A job with similar details already exists".to_string())
            } else {
                err.into()
            }
        })?;

        Ok(PostJobResponseDto {
            success: true,
            message: "Job posted successfully! It will be reviewed and published soon.".to_string(),
            slug: job.slug,
            id: job.id,
        })
    }

    /// Posts a paid job: the record is created in `payment_pending` status
    /// and a one-time checkout session is returned for the caller to
    /// redirect to. No listing becomes visible until the payment event
    /// arrives.
    pub async fn checkout(
        &self,
        dto: CheckoutJobDto,
        payments: &PaymentClient,
        app_url: &str,
    ) -> Result<CheckoutJobResponseDto, AppError> {
        let validated = Self::validate_combined(&dto.job)?;

        let tier = dto
            .listing_type
            .as_deref()
            .and_then(Tier::parse)
            .filter(|t| matches!(t, Tier::Standard | Tier::Featured))
            .unwrap_or(Tier::Standard);
        let (amount, product_name) = match tier {
            Tier::Featured => (FEATURED_PRICE_CENTS, "Featured Listing - 30 days"),
            _ => (STANDARD_PRICE_CENTS, "Standard Listing"),
        };

        let product_description =
            format!("{} at {}", validated.job_title, validated.company_name);
        let customer_email = validated.contact_email.clone();

        let params = Self::build_params(
            &dto.job,
            validated,
            JobStatus::PaymentPending,
            tier,
            tier == Tier::Featured,
            Some(amount),
        )?;

        let repo = JobRepository::new(self.db);
        let job = repo.create(params).await?;

        let session = payments
            .create_checkout_session(CheckoutSessionParams {
                mode: CheckoutMode::Payment,
                product_name: product_name.to_string(),
                product_description,
                unit_amount: amount,
                success_url: format!(
                    "{}/jobs/payment-success?session_id={{CHECKOUT_SESSION_ID}}&job_id={}",
                    app_url, job.id
                ),
                cancel_url: format!("{}/jobs/post?error=payment_cancelled", app_url),
                customer_email,
                metadata: vec![
                    ("jobId".to_string(), job.id.to_string()),
                    ("jobSlug".to_string(), job.slug.clone()),
                    ("listingType".to_string(), tier.as_str().to_string()),
                ],
            })
            .await?;

        repo.set_payment_session(job.id, session.id.clone()).await?;

        let checkout_url = session
            .url
            .ok_or_else(|| PaymentError::Api("checkout session has no URL".to_string()))?;

        Ok(CheckoutJobResponseDto {
            success: true,
            checkout_url,
            job_id: job.id,
            slug: job.slug,
        })
    }

    /// Synchronously verifies a checkout session and publishes the job.
    ///
    /// Fallback for the redirect landing page; the webhook path performs the
    /// same idempotent transition.
    pub async fn verify_payment(
        &self,
        session_id: &str,
        job_id: i32,
        payments: &PaymentClient,
    ) -> Result<VerifyPaymentResponseDto, AppError> {
        let session = payments.retrieve_checkout_session(session_id).await?;

        if session.payment_status.as_deref() != Some("paid") {
            return Err(AppError::BadRequest("Payment not completed".to_string()));
        }

        let repo = JobRepository::new(self.db);
        if repo.find_by_id(job_id).await?.is_none() {
            return Err(AppError::NotFound("Job not found".to_string()));
        }

        let job = repo.mark_published(job_id, session.payment_intent).await?;

        Ok(VerifyPaymentResponseDto {
            success: true,
            slug: job.slug,
            message: "Payment verified successfully".to_string(),
        })
    }

    /// Gets the publicly visible jobs, featured first then newest.
    pub async fn list_public(&self) -> Result<Vec<JobSummaryDto>, AppError> {
        let repo = JobRepository::new(self.db);
        let jobs = repo.list_published(Utc::now()).await?;

        Ok(jobs.into_iter().map(JobSummaryDto::from_entity).collect())
    }

    /// Gets all jobs for administrators, optionally narrowed by status.
    pub async fn list_admin(
        &self,
        status: Option<JobStatus>,
    ) -> Result<Vec<JobDto>, AppError> {
        let repo = JobRepository::new(self.db);
        let jobs = repo.list_all(status).await?;

        Ok(jobs.into_iter().map(JobDto::from_entity).collect())
    }

    /// Searches published jobs with ranking, filtering, and pagination.
    pub async fn search(&self, filter: JobFilter) -> Result<JobSearchDto, AppError> {
        let repo = JobRepository::new(self.db);
        let (jobs, total_count) = repo.search(&filter, Utc::now()).await?;

        let has_more = filter.offset + (jobs.len() as u64) < total_count;
        let query = filter.query.clone();

        Ok(JobSearchDto {
            jobs: jobs.into_iter().map(JobSummaryDto::from_entity).collect(),
            total_count,
            has_more,
            query,
            filters: filter,
        })
    }

    /// Applies an administrative update (approval or schedule change).
    pub async fn update(&self, id: i32, dto: UpdateJobDto) -> Result<JobDto, AppError> {
        let repo = JobRepository::new(self.db);
        let job = repo
            .update_admin(id, dto.status, dto.published_at)
            .await
            .map_err(|err| match err {
                sea_orm::DbErr::RecordNotFound(_) => {
                    AppError::NotFound("Job not found".to_string())
                }
                other => other.into(),
            })?;

        Ok(JobDto::from_entity(job))
    }

    /// Deletes a job posting (administrative reject).
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = JobRepository::new(self.db);
        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Job not found".to_string()))
        }
    }

    /// Validates the free-posting flow with a per-field error message.
    fn validate_detailed(dto: &PostJobDto) -> Result<ValidatedJob, AppError> {
        let job_title = Self::required(&dto.job_title, "Job title is required")?;
        let company_name = Self::required(&dto.company_name, "Company name is required")?;
        let contact_email = Self::required(&dto.contact_email, "Contact email is required")?;
        let application_url =
            Self::required(&dto.application_url, "Application URL is required")?;
        let description = Self::required(&dto.description, "Job description is required")?;

        Self::normalize(job_title, company_name, contact_email, application_url, description)
    }

    /// Validates the checkout flow with the combined error message.
    fn validate_combined(dto: &PostJobDto) -> Result<ValidatedJob, AppError> {
        let missing = "Missing required fields";
        let job_title = Self::required(&dto.job_title, missing)?;
        let company_name = Self::required(&dto.company_name, missing)?;
        let contact_email = Self::required(&dto.contact_email, missing)?;
        let application_url = Self::required(&dto.application_url, missing)?;
        let description = Self::required(&dto.description, missing)?;

        Self::normalize(job_title, company_name, contact_email, application_url, description)
    }

    fn required(value: &Option<String>, message: &str) -> Result<String, AppError> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .ok_or_else(|| AppError::BadRequest(message.to_string()))
    }

    fn normalize(
        job_title: String,
        company_name: String,
        contact_email: String,
        application_url: String,
        description: String,
    ) -> Result<ValidatedJob, AppError> {
        if !is_valid_email(&contact_email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        Ok(ValidatedJob {
            job_title,
            company_name,
            contact_email: contact_email.to_lowercase(),
            application_url: normalize_application_url(&application_url)?,
            description,
        })
    }

    fn build_params(
        dto: &PostJobDto,
        validated: ValidatedJob,
        status: JobStatus,
        tier: Tier,
        featured: bool,
        payment_amount: Option<i32>,
    ) -> Result<CreateJobParams, AppError> {
        let slug = job_slug(&validated.job_title, &validated.company_name)?;

        Ok(CreateJobParams {
            slug,
            job_title: validated.job_title,
            company_name: validated.company_name,
            company_logo_url: dto.company_logo_url.clone(),
            location: dto.location.clone(),
            work_location: dto
                .work_location
                .clone()
                .unwrap_or_else(|| "On-site".to_string()),
            job_type: dto
                .job_type
                .clone()
                .unwrap_or_else(|| "Full Time".to_string()),
            salary_range: dto.salary_range.clone(),
            application_url: validated.application_url,
            description: validated.description,
            requirements: dto.requirements.clone(),
            benefits: dto.benefits.clone(),
            contact_email: validated.contact_email,
            company_website: dto.company_website.clone(),
            tags: normalize_tags(dto.tags.as_deref().unwrap_or(&[])),
            status,
            tier,
            featured,
            payment_status: PaymentStatus::Unpaid,
            payment_amount,
            expires_at: Some(Utc::now() + Duration::days(LISTING_WINDOW_DAYS)),
        })
    }
}
