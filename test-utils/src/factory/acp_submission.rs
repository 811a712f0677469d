//! ACP submission factory for creating test premium-listing submissions.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{PaymentStatus, SubmissionStatus, Tier};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ACP submissions with customizable fields.
///
/// Defaults produce a pending, unpaid, pro-tier submission with no linked
/// listing.
pub struct AcpSubmissionFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    name: String,
    submitter_email: String,
    selected_tier: Tier,
    status: SubmissionStatus,
    payment_session_id: Option<String>,
}

impl<'a> AcpSubmissionFactory<'a> {
    /// Creates a new AcpSubmissionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Submission {id}"` where id is auto-incremented
    /// - submitter_email: `"submitter{id}@example.com"`
    /// - selected_tier: `Pro`, status: `Pending`
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            name: format!("Submission {}", id),
            submitter_email: format!("submitter{}@example.com", id),
            selected_tier: Tier::Pro,
            status: SubmissionStatus::Pending,
            payment_session_id: None,
        }
    }

    /// Sets the prospective listing name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the submitter email.
    pub fn submitter_email(mut self, submitter_email: impl Into<String>) -> Self {
        self.submitter_email = submitter_email.into();
        self
    }

    /// Sets the selected tier.
    pub fn selected_tier(mut self, selected_tier: Tier) -> Self {
        self.selected_tier = selected_tier;
        self
    }

    /// Sets the review status.
    pub fn status(mut self, status: SubmissionStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the stored checkout session id.
    pub fn payment_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.payment_session_id = Some(session_id.into());
        self
    }

    /// Builds and inserts the submission entity into the database.
    pub async fn build(self) -> Result<entity::acp_submission::Model, DbErr> {
        entity::acp_submission::ActiveModel {
            submitter_name: ActiveValue::Set("Test Submitter".to_string()),
            submitter_email: ActiveValue::Set(self.submitter_email),
            submitter_company: ActiveValue::Set(None),
            name: ActiveValue::Set(self.name.clone()),
            description: ActiveValue::Set(format!("{} description", self.name)),
            website: ActiveValue::Set(None),
            github_url: ActiveValue::Set("https://github.com/example/acp".to_string()),
            category_id: ActiveValue::Set(self.category_id),
            tags: ActiveValue::Set(serde_json::json!(["agents"])),
            protocol_support: ActiveValue::Set(serde_json::json!(["ACP v0.3"])),
            selected_tier: ActiveValue::Set(self.selected_tier),
            status: ActiveValue::Set(self.status),
            payment_status: ActiveValue::Set(PaymentStatus::Unpaid),
            payment_session_id: ActiveValue::Set(self.payment_session_id),
            payment_ref: ActiveValue::Set(None),
            amount: ActiveValue::Set(None),
            acp_server_id: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending pro-tier submission with default values.
pub async fn create_submission(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::acp_submission::Model, DbErr> {
    AcpSubmissionFactory::new(db, category_id).build().await
}
