use sea_orm_migration::{prelude::*, schema::*};

use super::m20260710_000001_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcpServer::Table)
                    .if_not_exists()
                    .col(pk_auto(AcpServer::Id))
                    .col(string_uniq(AcpServer::Slug))
                    .col(string(AcpServer::Name))
                    .col(text(AcpServer::Description))
                    .col(string_null(AcpServer::Website))
                    .col(string_null(AcpServer::GithubUrl))
                    .col(string_null(AcpServer::LogoUrl))
                    .col(integer(AcpServer::PrimaryCategoryId))
                    .col(json(AcpServer::Tags))
                    .col(json(AcpServer::ProtocolSupport))
                    .col(string_null(AcpServer::ApiEndpoint))
                    .col(boolean(AcpServer::ApiKeyRequired).default(false))
                    .col(string_null(AcpServer::SubmitterName))
                    .col(string_null(AcpServer::SubmitterEmail))
                    .col(string_null(AcpServer::SubmitterCompany))
                    .col(string(AcpServer::Status))
                    .col(integer(AcpServer::Tier).default(0))
                    .col(boolean(AcpServer::Featured).default(false))
                    .col(boolean(AcpServer::Verified).default(false))
                    .col(integer(AcpServer::Stars).default(0))
                    .col(integer(AcpServer::Downloads).default(0))
                    .col(boolean(AcpServer::CustomProfile).default(false))
                    .col(boolean(AcpServer::LeadGeneration).default(false))
                    .col(boolean(AcpServer::AnalyticsEnabled).default(false))
                    .col(timestamp_null(AcpServer::PublishedAt))
                    .col(
                        timestamp(AcpServer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_acp_server_primary_category_id")
                            .from(AcpServer::Table, AcpServer::PrimaryCategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcpServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcpServer {
    Table,
    Id,
    Slug,
    Name,
    Description,
    Website,
    GithubUrl,
    LogoUrl,
    PrimaryCategoryId,
    Tags,
    ProtocolSupport,
    ApiEndpoint,
    ApiKeyRequired,
    SubmitterName,
    SubmitterEmail,
    SubmitterCompany,
    Status,
    Tier,
    Featured,
    Verified,
    Stars,
    Downloads,
    CustomProfile,
    LeadGeneration,
    AnalyticsEnabled,
    PublishedAt,
    CreatedAt,
}
