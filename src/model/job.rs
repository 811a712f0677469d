use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{JobStatus, PaymentStatus, Tier};
use serde::{Deserialize, Serialize};

use crate::{model::server::default_limit, util::tags::string_array};

/// Request body for posting a job (free review flow and paid checkout flow).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostJobDto {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_logo_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub work_location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub application_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Request body for the paid checkout flow: the job fields plus the selected
/// listing tier.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutJobDto {
    #[serde(flatten)]
    pub job: PostJobDto,
    #[serde(default)]
    pub listing_type: Option<String>,
}

/// Full job shape returned to administrators and on detail reads.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i32,
    pub slug: String,
    pub job_title: String,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub location: Option<String>,
    pub work_location: String,
    pub job_type: String,
    pub salary_range: Option<String>,
    pub application_url: String,
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub contact_email: String,
    pub company_website: Option<String>,
    pub tags: Vec<String>,
    pub status: JobStatus,
    pub tier: Tier,
    pub featured: bool,
    pub verified: bool,
    pub urgent: bool,
    pub highlighted: bool,
    pub payment_status: PaymentStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl JobDto {
    pub fn from_entity(entity: entity::job::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            job_title: entity.job_title,
            company_name: entity.company_name,
            company_logo_url: entity.company_logo_url,
            location: entity.location,
            work_location: entity.work_location,
            job_type: entity.job_type,
            salary_range: entity.salary_range,
            application_url: entity.application_url,
            description: entity.description,
            requirements: entity.requirements,
            benefits: entity.benefits,
            contact_email: entity.contact_email,
            company_website: entity.company_website,
            tags: string_array(&entity.tags),
            status: entity.status,
            tier: entity.tier,
            featured: entity.featured,
            verified: entity.verified,
            urgent: entity.urgent,
            highlighted: entity.highlighted,
            payment_status: entity.payment_status,
            published_at: entity.published_at,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }
}

/// Public job shape for listings and search results.
///
/// Omits lifecycle and contact fields that are only meaningful to the poster
/// and to administrators.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobSummaryDto {
    pub id: i32,
    pub slug: String,
    pub job_title: String,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub location: Option<String>,
    pub work_location: String,
    pub job_type: String,
    pub salary_range: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub tier: Tier,
    pub featured: bool,
    pub urgent: bool,
    pub highlighted: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl JobSummaryDto {
    pub fn from_entity(entity: entity::job::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            job_title: entity.job_title,
            company_name: entity.company_name,
            company_logo_url: entity.company_logo_url,
            location: entity.location,
            work_location: entity.work_location,
            job_type: entity.job_type,
            salary_range: entity.salary_range,
            description: entity.description,
            tags: string_array(&entity.tags),
            tier: entity.tier,
            featured: entity.featured,
            urgent: entity.urgent,
            highlighted: entity.highlighted,
            published_at: entity.published_at,
            expires_at: entity.expires_at,
        }
    }
}

/// Search criteria for job postings.
///
/// Every field is optional; absent filters impose no constraint. The struct
/// doubles as the query-string shape of `GET /api/jobs/search`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    #[serde(default, rename = "q", skip_serializing)]
    pub query: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub work_location: Option<String>,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default = "default_limit", skip_serializing)]
    pub limit: u64,
    #[serde(default, skip_serializing)]
    pub offset: u64,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            query: None,
            location: None,
            job_type: None,
            work_location: None,
            tier: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchDto {
    pub jobs: Vec<JobSummaryDto>,
    pub total_count: u64,
    pub has_more: bool,
    pub query: Option<String>,
    /// Echo of the categorical filters applied (location, jobType,
    /// workLocation, tier).
    pub filters: JobFilter,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostJobResponseDto {
    pub success: bool,
    pub message: String,
    pub slug: String,
    pub id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutJobResponseDto {
    pub success: bool,
    pub checkout_url: String,
    pub job_id: i32,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponseDto {
    pub success: bool,
    pub slug: String,
    pub message: String,
}

/// Administrative update for a job posting (approval and schedule changes).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobDto {
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Parameters for inserting a new job posting.
#[derive(Debug, Clone)]
pub struct CreateJobParams {
    pub slug: String,
    pub job_title: String,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub location: Option<String>,
    pub work_location: String,
    pub job_type: String,
    pub salary_range: Option<String>,
    pub application_url: String,
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub contact_email: String,
    pub company_website: Option<String>,
    pub tags: Vec<String>,
    pub status: JobStatus,
    pub tier: Tier,
    pub featured: bool,
    pub payment_status: PaymentStatus,
    pub payment_amount: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
}
