use chrono::Utc;
use entity::sea_orm_active_enums::{PaymentStatus, SubmissionStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::submission::CreateSubmissionParams;

pub struct SubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pending, unpaid submission.
    pub async fn create(
        &self,
        params: CreateSubmissionParams,
    ) -> Result<entity::acp_submission::Model, DbErr> {
        entity::acp_submission::ActiveModel {
            submitter_name: ActiveValue::Set(params.submitter_name),
            submitter_email: ActiveValue::Set(params.submitter_email),
            submitter_company: ActiveValue::Set(params.submitter_company),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            website: ActiveValue::Set(params.website),
            github_url: ActiveValue::Set(params.github_url),
            category_id: ActiveValue::Set(params.category_id),
            tags: ActiveValue::Set(serde_json::json!(params.tags)),
            protocol_support: ActiveValue::Set(serde_json::json!(params.protocol_support)),
            selected_tier: ActiveValue::Set(params.selected_tier),
            status: ActiveValue::Set(SubmissionStatus::Pending),
            payment_status: ActiveValue::Set(PaymentStatus::Unpaid),
            payment_session_id: ActiveValue::Set(None),
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

    /// Finds a submission by id.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::acp_submission::Model>, DbErr> {
        entity::prelude::AcpSubmission::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds the most recent submission for a submitter email.
    pub async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::acp_submission::Model>, DbErr> {
        entity::prelude::AcpSubmission::find()
            .filter(entity::acp_submission::Column::SubmitterEmail.eq(email))
            .order_by_desc(entity::acp_submission::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Stores the checkout session id and amount for a paid-tier submission.
    pub async fn set_payment_session(
        &self,
        id: i32,
        session_id: String,
        amount: i32,
    ) -> Result<entity::acp_submission::Model, DbErr> {
        let submission = self.require(id).await?;

        let mut active_model: entity::acp_submission::ActiveModel = submission.into();
        active_model.payment_session_id = ActiveValue::Set(Some(session_id));
        active_model.amount = ActiveValue::Set(Some(amount));

        active_model.update(self.db).await
    }

    /// Marks a submission approved and paid after a confirmed payment.
    ///
    /// Idempotent: `reviewed_at` is only stamped the first time.
    pub async fn approve(
        &self,
        id: i32,
        session_id: Option<String>,
        payment_ref: Option<String>,
    ) -> Result<entity::acp_submission::Model, DbErr> {
        let submission = self.require(id).await?;

        let reviewed_at = submission.reviewed_at;
        let mut active_model: entity::acp_submission::ActiveModel = submission.into();
        active_model.status = ActiveValue::Set(SubmissionStatus::Approved);
        active_model.payment_status = ActiveValue::Set(PaymentStatus::Paid);
        if let Some(session_id) = session_id {
            active_model.payment_session_id = ActiveValue::Set(Some(session_id));
        }
        if let Some(payment_ref) = payment_ref {
            active_model.payment_ref = ActiveValue::Set(Some(payment_ref));
        }
        if reviewed_at.is_none() {
            active_model.reviewed_at = ActiveValue::Set(Some(Utc::now()));
        }

        active_model.update(self.db).await
    }

    /// Links the listing created from this submission.
    pub async fn link_server(
        &self,
        id: i32,
        acp_server_id: i32,
    ) -> Result<entity::acp_submission::Model, DbErr> {
        let submission = self.require(id).await?;

        let mut active_model: entity::acp_submission::ActiveModel = submission.into();
        active_model.acp_server_id = ActiveValue::Set(Some(acp_server_id));

        active_model.update(self.db).await
    }

    async fn require(&self, id: i32) -> Result<entity::acp_submission::Model, DbErr> {
        entity::prelude::AcpSubmission::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Submission with id {} not found",
                id
            )))
    }
}
