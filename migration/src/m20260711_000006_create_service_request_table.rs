use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRequest::Id))
                    .col(string(ServiceRequest::Name))
                    .col(string(ServiceRequest::Email))
                    .col(string_null(ServiceRequest::Company))
                    .col(string_null(ServiceRequest::Phone))
                    .col(string(ServiceRequest::ProjectType))
                    .col(text(ServiceRequest::Description))
                    .col(string_null(ServiceRequest::Budget))
                    .col(string_null(ServiceRequest::Timeline))
                    .col(string(ServiceRequest::Status))
                    .col(
                        timestamp(ServiceRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceRequest {
    Table,
    Id,
    Name,
    Email,
    Company,
    Phone,
    ProjectType,
    Description,
    Budget,
    Timeline,
    Status,
    CreatedAt,
}
