use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(string_uniq(Job::Slug))
                    .col(string(Job::JobTitle))
                    .col(string(Job::CompanyName))
                    .col(string_null(Job::CompanyLogoUrl))
                    .col(string_null(Job::Location))
                    .col(string(Job::WorkLocation))
                    .col(string(Job::JobType))
                    .col(string_null(Job::SalaryRange))
                    .col(string(Job::ApplicationUrl))
                    .col(text(Job::Description))
                    .col(text_null(Job::Requirements))
                    .col(text_null(Job::Benefits))
                    .col(string(Job::ContactEmail))
                    .col(string_null(Job::CompanyWebsite))
                    .col(json(Job::Tags))
                    .col(string(Job::Status))
                    .col(integer(Job::Tier).default(1))
                    .col(boolean(Job::Featured).default(false))
                    .col(boolean(Job::Verified).default(false))
                    .col(boolean(Job::Urgent).default(false))
                    .col(boolean(Job::Highlighted).default(false))
                    .col(string(Job::PaymentStatus))
                    .col(integer_null(Job::PaymentAmount))
                    .col(string_null(Job::PaymentSessionId))
                    .col(string_null(Job::PaymentRef))
                    .col(timestamp_null(Job::PublishedAt))
                    .col(timestamp_null(Job::ExpiresAt))
                    .col(
                        timestamp(Job::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    Slug,
    JobTitle,
    CompanyName,
    CompanyLogoUrl,
    Location,
    WorkLocation,
    JobType,
    SalaryRange,
    ApplicationUrl,
    Description,
    Requirements,
    Benefits,
    ContactEmail,
    CompanyWebsite,
    Tags,
    Status,
    Tier,
    Featured,
    Verified,
    Urgent,
    Highlighted,
    PaymentStatus,
    PaymentAmount,
    PaymentSessionId,
    PaymentRef,
    PublishedAt,
    ExpiresAt,
    CreatedAt,
}
