use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{PaymentStatus, SubmissionStatus, Tier};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "acp_submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub submitter_name: String,
    pub submitter_email: String,
    pub submitter_company: Option<String>,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub website: Option<String>,
    pub github_url: String,
    pub category_id: i32,
    /// JSON array of normalized tag tokens.
    pub tags: Json,
    /// JSON array of supported protocol labels.
    pub protocol_support: Json,
    pub selected_tier: Tier,
    pub status: SubmissionStatus,
    pub payment_status: PaymentStatus,
    pub payment_session_id: Option<String>,
    pub payment_ref: Option<String>,
    /// Amount in cents charged for the selected tier, once known.
    pub amount: Option<i32>,
    /// Listing created from this submission, once payment has cleared
    /// (or immediately for the free tier).
    pub acp_server_id: Option<i32>,
    pub reviewed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::acp_server::Entity",
        from = "Column::AcpServerId",
        to = "super::acp_server::Column::Id"
    )]
    AcpServer,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::acp_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcpServer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
