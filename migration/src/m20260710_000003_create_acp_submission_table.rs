use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260710_000001_create_category_table::Category,
    m20260710_000002_create_acp_server_table::AcpServer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcpSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(AcpSubmission::Id))
                    .col(string(AcpSubmission::SubmitterName))
                    .col(string(AcpSubmission::SubmitterEmail))
                    .col(string_null(AcpSubmission::SubmitterCompany))
                    .col(string(AcpSubmission::Name))
                    .col(text(AcpSubmission::Description))
                    .col(string_null(AcpSubmission::Website))
                    .col(string(AcpSubmission::GithubUrl))
                    .col(integer(AcpSubmission::CategoryId))
                    .col(json(AcpSubmission::Tags))
                    .col(json(AcpSubmission::ProtocolSupport))
                    .col(integer(AcpSubmission::SelectedTier).default(0))
                    .col(string(AcpSubmission::Status))
                    .col(string(AcpSubmission::PaymentStatus))
                    .col(string_null(AcpSubmission::PaymentSessionId))
                    .col(string_null(AcpSubmission::PaymentRef))
                    .col(integer_null(AcpSubmission::Amount))
                    .col(integer_null(AcpSubmission::AcpServerId))
                    .col(timestamp_null(AcpSubmission::ReviewedAt))
                    .col(
                        timestamp(AcpSubmission::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_acp_submission_category_id")
                            .from(AcpSubmission::Table, AcpSubmission::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_acp_submission_acp_server_id")
                            .from(AcpSubmission::Table, AcpSubmission::AcpServerId)
                            .to(AcpServer::Table, AcpServer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcpSubmission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcpSubmission {
    Table,
    Id,
    SubmitterName,
    SubmitterEmail,
    SubmitterCompany,
    Name,
    Description,
    Website,
    GithubUrl,
    CategoryId,
    Tags,
    ProtocolSupport,
    SelectedTier,
    Status,
    PaymentStatus,
    PaymentSessionId,
    PaymentRef,
    Amount,
    AcpServerId,
    ReviewedAt,
    CreatedAt,
}
