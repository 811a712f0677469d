use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, SubmissionStatus, Tier};
use serde::{Deserialize, Serialize};

use crate::{model::server::AcpServerDto, util::tags::string_array};

/// Request body for submitting an ACP server listing (any tier).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAcpDto {
    #[serde(default)]
    pub submitter_name: Option<String>,
    #[serde(default)]
    pub submitter_email: Option<String>,
    #[serde(default)]
    pub submitter_company: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub protocol_support: Option<Vec<String>>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub api_key_required: Option<bool>,
    #[serde(default)]
    pub selected_tier: Option<Tier>,
}

/// Outcome of a submission request.
///
/// Free-tier submissions report the created records directly; paid tiers
/// report the checkout redirect instead.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAcpResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acp_server_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Submission read-back shape, including the linked listing once it exists.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: i32,
    pub submitter_name: String,
    pub submitter_email: String,
    pub submitter_company: Option<String>,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub github_url: String,
    pub category_id: i32,
    pub tags: Vec<String>,
    pub protocol_support: Vec<String>,
    pub selected_tier: Tier,
    pub status: SubmissionStatus,
    pub payment_status: PaymentStatus,
    pub acp_server: Option<AcpServerDto>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl SubmissionDto {
    pub fn from_entity(
        entity: entity::acp_submission::Model,
        acp_server: Option<AcpServerDto>,
    ) -> Self {
        Self {
            id: entity.id,
            submitter_name: entity.submitter_name,
            submitter_email: entity.submitter_email,
            submitter_company: entity.submitter_company,
            name: entity.name,
            description: entity.description,
            website: entity.website,
            github_url: entity.github_url,
            category_id: entity.category_id,
            tags: string_array(&entity.tags),
            protocol_support: string_array(&entity.protocol_support),
            selected_tier: entity.selected_tier,
            status: entity.status,
            payment_status: entity.payment_status,
            acp_server,
            reviewed_at: entity.reviewed_at,
            created_at: entity.created_at,
        }
    }
}

/// Query-string shape of `GET /api/acp/submit`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetSubmissionQuery {
    #[serde(default)]
    pub submission_id: Option<i32>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Parameters for inserting a new submission.
#[derive(Debug, Clone)]
pub struct CreateSubmissionParams {
    pub submitter_name: String,
    pub submitter_email: String,
    pub submitter_company: Option<String>,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub github_url: String,
    pub category_id: i32,
    pub tags: Vec<String>,
    pub protocol_support: Vec<String>,
    pub selected_tier: Tier,
}
