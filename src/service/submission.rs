use entity::sea_orm_active_enums::{ServerStatus, Tier};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        category::CategoryRepository, server::AcpServerRepository,
        submission::SubmissionRepository,
    },
    error::{payment::PaymentError, AppError},
    model::{
        server::{AcpServerDto, CreateServerParams},
        submission::{
            CreateSubmissionParams, GetSubmissionQuery, SubmissionDto, SubmitAcpDto,
            SubmitAcpResponseDto,
        },
    },
    service::{
        payment::{CheckoutMode, CheckoutSessionParams, PaymentClient},
        slug::SlugAllocator,
    },
    util::{tags::normalize_tags, validate::is_valid_email},
};

/// Monthly price of a pro listing, in cents.
const PRO_PRICE_CENTS: i32 = 4900;

/// Monthly price of a featured listing, in cents.
const FEATURED_PRICE_CENTS: i32 = 9900;

pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Accepts an ACP server submission.
    ///
    /// The submission record is always created first and is the durable
    /// source of truth. Free-tier submissions also create the listing
    /// immediately, in `pending` status awaiting manual review; paid tiers
    /// get a subscription checkout session instead and the listing is created
    /// by the payment reconciler once the payment clears.
    pub async fn submit(
        &self,
        dto: SubmitAcpDto,
        payments: Option<&PaymentClient>,
        app_url: &str,
    ) -> Result<SubmitAcpResponseDto, AppError> {
        let params = self.validate(&dto).await?;
        let tier = params.selected_tier;
        let submitter_email = params.submitter_email.clone();

        let submissions = SubmissionRepository::new(self.db);
        let submission = submissions.create(params).await?;
        tracing::info!(
            "Submission {} created for '{}' ({})",
            submission.id,
            submission.name,
            tier.as_str()
        );

        if tier == Tier::Free {
            return self.create_free_listing(submission).await;
        }

        // Only pro and featured reach this point; free returned above and
        // standard was rejected during validation.
        let amount = match tier {
            Tier::Featured => FEATURED_PRICE_CENTS,
            _ => PRO_PRICE_CENTS,
        };

        let payments = payments.ok_or(PaymentError::NotConfigured)?;

        let product_name = match tier {
            Tier::Featured => "Featured ACP Listing",
            _ => "Pro ACP Listing",
        };
        let session = payments
            .create_checkout_session(CheckoutSessionParams {
                mode: CheckoutMode::Subscription,
                product_name: product_name.to_string(),
                product_description: "Premium ACP listing with enhanced features".to_string(),
                unit_amount: amount,
                success_url: format!(
                    "{}/submit-acp/success?session_id={{CHECKOUT_SESSION_ID}}",
                    app_url
                ),
                cancel_url: format!("{}/submit-acp?tier={}", app_url, tier.as_str()),
                customer_email: submitter_email.clone(),
                metadata: vec![
                    ("submissionId".to_string(), submission.id.to_string()),
                    ("tier".to_string(), tier.as_str().to_string()),
                    ("submitterEmail".to_string(), submitter_email),
                ],
            })
            .await?;

        submissions
            .set_payment_session(submission.id, session.id.clone(), amount)
            .await?;

        Ok(SubmitAcpResponseDto {
            success: true,
            message: None,
            submission_id: Some(submission.id),
            acp_server_id: None,
            payment_url: session.url,
            session_id: Some(session.id),
        })
    }

    /// Looks up a submission by id, or the most recent one for an email.
    pub async fn find(&self, query: GetSubmissionQuery) -> Result<SubmissionDto, AppError> {
        let submissions = SubmissionRepository::new(self.db);

        let submission = match (query.submission_id, query.email.as_deref()) {
            (Some(id), _) => submissions.find_by_id(id).await?,
            (None, Some(email)) => submissions.find_latest_by_email(email).await?,
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Missing submissionId or email".to_string(),
                ))
            }
        };

        let submission =
            submission.ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let acp_server = match submission.acp_server_id {
            Some(server_id) => {
                let servers = AcpServerRepository::new(self.db);
                servers
                    .find_by_id(server_id)
                    .await?
                    .map(|server| AcpServerDto::from_entity(server, None))
            }
            None => None,
        };

        Ok(SubmissionDto::from_entity(submission, acp_server))
    }

    /// Creates the pending listing for a free-tier submission.
    ///
    /// A failure here is logged and the caller is still told the submission
    /// succeeded; the submission record remains for manual reconciliation.
    async fn create_free_listing(
        &self,
        submission: entity::acp_submission::Model,
    ) -> Result<SubmitAcpResponseDto, AppError> {
        let message = "ACP submitted successfully for review".to_string();

        match self.insert_free_listing(&submission).await {
            Ok(server) => {
                let submissions = SubmissionRepository::new(self.db);
                submissions.link_server(submission.id, server.id).await?;

                Ok(SubmitAcpResponseDto {
                    success: true,
                    message: Some(message),
                    submission_id: Some(submission.id),
                    acp_server_id: Some(server.id),
                    payment_url: None,
                    session_id: None,
                })
            }
            Err(err) => {
                tracing::error!(
                    "Listing creation failed for submission {}: {}",
                    submission.id,
                    err
                );
                Ok(SubmitAcpResponseDto {
                    success: true,
                    message: Some(message),
                    submission_id: Some(submission.id),
                    acp_server_id: None,
                    payment_url: None,
                    session_id: None,
                })
            }
        }
    }

    async fn insert_free_listing(
        &self,
        submission: &entity::acp_submission::Model,
    ) -> Result<entity::acp_server::Model, AppError> {
        let allocator = SlugAllocator::new(self.db);
        let slug = allocator.allocate_server_slug(&submission.name).await?;

        let servers = AcpServerRepository::new(self.db);
        let server = servers
            .create(CreateServerParams {
                slug,
                name: submission.name.clone(),
                description: submission.description.clone(),
                website: submission.website.clone(),
                github_url: Some(submission.github_url.clone()),
                logo_url: None,
                primary_category_id: submission.category_id,
                tags: crate::util::tags::string_array(&submission.tags),
                protocol_support: crate::util::tags::string_array(&submission.protocol_support),
                api_endpoint: None,
                api_key_required: false,
                submitter_name: Some(submission.submitter_name.clone()),
                submitter_email: Some(submission.submitter_email.clone()),
                submitter_company: submission.submitter_company.clone(),
                status: ServerStatus::Pending,
                tier: Tier::Free,
                featured: false,
                verified: false,
                stars: 0,
                downloads: 0,
                custom_profile: false,
                lead_generation: false,
                analytics_enabled: false,
                published_at: None,
            })
            .await?;

        Ok(server)
    }

    /// Validates the submission fields and resolves the category.
    async fn validate(&self, dto: &SubmitAcpDto) -> Result<CreateSubmissionParams, AppError> {
        let missing = "Missing required fields";
        let submitter_name = Self::required(&dto.submitter_name, missing)?;
        let submitter_email = Self::required(&dto.submitter_email, missing)?;
        let name = Self::required(&dto.name, missing)?;
        let description = Self::required(&dto.description, missing)?;
        let github_url = Self::required(&dto.github_url, missing)?;
        let category_id =
            dto.category_id.ok_or_else(|| AppError::BadRequest(missing.to_string()))?;

        if !is_valid_email(&submitter_email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        let categories = CategoryRepository::new(self.db);
        if categories.find_by_id(category_id).await?.is_none() {
            return Err(AppError::BadRequest("Invalid category".to_string()));
        }

        let selected_tier = dto.selected_tier.unwrap_or(Tier::Free);
        if selected_tier == Tier::Standard {
            return Err(AppError::BadRequest("Invalid tier selected".to_string()));
        }

        Ok(CreateSubmissionParams {
            submitter_name,
            submitter_email,
            submitter_company: dto.submitter_company.clone(),
            name,
            description,
            website: dto.website.clone(),
            github_url,
            category_id,
            tags: normalize_tags(dto.tags.as_deref().unwrap_or(&[])),
            protocol_support: dto.protocol_support.clone().unwrap_or_default(),
            selected_tier,
        })
    }

    fn required(value: &Option<String>, message: &str) -> Result<String, AppError> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .ok_or_else(|| AppError::BadRequest(message.to_string()))
    }
}
