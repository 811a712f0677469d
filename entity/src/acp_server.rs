use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{ServerStatus, Tier};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "acp_server")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub website: Option<String>,
    pub github_url: Option<String>,
    pub logo_url: Option<String>,
    pub primary_category_id: i32,
    /// JSON array of normalized tag tokens.
    pub tags: Json,
    /// JSON array of supported protocol labels, e.g. `["ACP v0.3", "MCP"]`.
    pub protocol_support: Json,
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
    /// Set exactly when `status` becomes `active`.
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::PrimaryCategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
