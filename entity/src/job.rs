use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{JobStatus, PaymentStatus, Tier};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub job_title: String,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub location: Option<String>,
    pub work_location: String,
    pub job_type: String,
    pub salary_range: Option<String>,
    pub application_url: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub benefits: Option<String>,
    pub contact_email: String,
    pub company_website: Option<String>,
    /// JSON array of normalized tag tokens.
    pub tags: Json,
    pub status: JobStatus,
    pub tier: Tier,
    pub featured: bool,
    pub verified: bool,
    pub urgent: bool,
    pub highlighted: bool,
    pub payment_status: PaymentStatus,
    pub payment_amount: Option<i32>,
    pub payment_session_id: Option<String>,
    pub payment_ref: Option<String>,
    /// Set exactly when `status` becomes `published`.
    pub published_at: Option<DateTimeUtc>,
    pub expires_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
