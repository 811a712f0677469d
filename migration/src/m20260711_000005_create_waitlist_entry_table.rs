use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WaitlistEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(WaitlistEntry::Id))
                    .col(string_uniq(WaitlistEntry::Email))
                    .col(text_null(WaitlistEntry::Tools))
                    .col(boolean(WaitlistEntry::Consent).default(false))
                    .col(
                        timestamp(WaitlistEntry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(WaitlistEntry::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WaitlistEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WaitlistEntry {
    Table,
    Id,
    Email,
    Tools,
    Consent,
    CreatedAt,
    UpdatedAt,
}
