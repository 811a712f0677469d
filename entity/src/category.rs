use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::acp_server::Entity")]
    AcpServer,
    #[sea_orm(has_many = "super::acp_submission::Entity")]
    AcpSubmission,
}

impl Related<super::acp_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcpServer.def()
    }
}

impl Related<super::acp_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcpSubmission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
