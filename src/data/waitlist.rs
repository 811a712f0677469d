use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct WaitlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WaitlistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a waitlist entry keyed by email.
    ///
    /// A repeat signup for the same email updates the stored tools, consent,
    /// and `updated_at` rather than creating a duplicate. The email must
    /// already be lowercased by the caller.
    pub async fn upsert(
        &self,
        email: String,
        tools: Option<String>,
        consent: bool,
    ) -> Result<entity::waitlist_entry::Model, DbErr> {
        let now = Utc::now();

        entity::prelude::WaitlistEntry::insert(entity::waitlist_entry::ActiveModel {
            email: ActiveValue::Set(email),
            tools: ActiveValue::Set(tools),
            consent: ActiveValue::Set(consent),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::waitlist_entry::Column::Email)
                .update_columns([
                    entity::waitlist_entry::Column::Tools,
                    entity::waitlist_entry::Column::Consent,
                    entity::waitlist_entry::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Gets all waitlist entries, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::waitlist_entry::Model>, DbErr> {
        entity::prelude::WaitlistEntry::find()
            .order_by_desc(entity::waitlist_entry::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
