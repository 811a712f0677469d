use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ServerStatus, Tier};
use serde::{Deserialize, Serialize};

use crate::{model::category::CategoryDto, util::tags::string_array};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AcpServerDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub github_url: Option<String>,
    pub logo_url: Option<String>,
    pub primary_category: Option<CategoryDto>,
    pub tags: Vec<String>,
    pub protocol_support: Vec<String>,
    pub status: ServerStatus,
    pub tier: Tier,
    pub featured: bool,
    pub verified: bool,
    pub stars: i32,
    pub downloads: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl AcpServerDto {
    /// Converts an entity model (plus its optionally joined category) into the
    /// public listing shape. Submitter contact details never leave the server.
    pub fn from_entity(
        entity: entity::acp_server::Model,
        category: Option<entity::category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            description: entity.description,
            website: entity.website,
            github_url: entity.github_url,
            logo_url: entity.logo_url,
            primary_category: category.map(CategoryDto::from_entity),
            tags: string_array(&entity.tags),
            protocol_support: string_array(&entity.protocol_support),
            status: entity.status,
            tier: entity.tier,
            featured: entity.featured,
            verified: entity.verified,
            stars: entity.stars,
            downloads: entity.downloads,
            published_at: entity.published_at,
            created_at: entity.created_at,
        }
    }
}

/// Search criteria for the server directory.
///
/// Every field is optional; absent filters impose no constraint. The struct
/// doubles as the query-string shape of `GET /api/search`.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerFilter {
    #[serde(default, rename = "q")]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

impl Default for ServerFilter {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

pub(crate) fn default_limit() -> u64 {
    20
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServerSearchDto {
    pub servers: Vec<AcpServerDto>,
    pub total_count: u64,
    pub has_more: bool,
    pub query: Option<String>,
    pub category: Option<String>,
}

/// Administrative update for a server listing; currently only the lifecycle
/// status can change (approval).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateServerDto {
    pub status: Option<ServerStatus>,
}

/// Parameters for inserting a new server listing.
#[derive(Debug, Clone)]
pub struct CreateServerParams {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub github_url: Option<String>,
    pub logo_url: Option<String>,
    pub primary_category_id: i32,
    pub tags: Vec<String>,
    pub protocol_support: Vec<String>,
    pub api_endpoint: Option<String>,
    pub api_key_required: bool,
    pub submitter_name: Option<String>,
    pub submitter_email: Option<String>,
    pub submitter_company: Option<String>,
    pub status: ServerStatus,
    pub tier: Tier,
    pub featured: bool,
    pub verified: bool,
    pub stars: i32,
    pub downloads: i32,
    pub custom_profile: bool,
    pub lead_generation: bool,
    pub analytics_enabled: bool,
    pub published_at: Option<DateTime<Utc>>,
}
