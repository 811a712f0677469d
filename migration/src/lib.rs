pub use sea_orm_migration::prelude::*;

mod m20260710_000001_create_category_table;
mod m20260710_000002_create_acp_server_table;
mod m20260710_000003_create_acp_submission_table;
mod m20260711_000004_create_job_table;
mod m20260711_000005_create_waitlist_entry_table;
mod m20260711_000006_create_service_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260710_000001_create_category_table::Migration),
            Box::new(m20260710_000002_create_acp_server_table::Migration),
            Box::new(m20260710_000003_create_acp_submission_table::Migration),
            Box::new(m20260711_000004_create_job_table::Migration),
            Box::new(m20260711_000005_create_waitlist_entry_table::Migration),
            Box::new(m20260711_000006_create_service_request_table::Migration),
        ]
    }
}
