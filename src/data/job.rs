use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{JobStatus, PaymentStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    data::{contains_insensitive, tag_contains},
    model::job::{CreateJobParams, JobFilter},
    util::tags::tokenize,
};

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new job posting.
    pub async fn create(&self, params: CreateJobParams) -> Result<entity::job::Model, DbErr> {
        entity::job::ActiveModel {
            slug: ActiveValue::Set(params.slug),
            job_title: ActiveValue::Set(params.job_title),
            company_name: ActiveValue::Set(params.company_name),
            company_logo_url: ActiveValue::Set(params.company_logo_url),
            location: ActiveValue::Set(params.location),
            work_location: ActiveValue::Set(params.work_location),
            job_type: ActiveValue::Set(params.job_type),
            salary_range: ActiveValue::Set(params.salary_range),
            application_url: ActiveValue::Set(params.application_url),
            description: ActiveValue::Set(params.description),
            requirements: ActiveValue::Set(params.requirements),
            benefits: ActiveValue::Set(params.benefits),
            contact_email: ActiveValue::Set(params.contact_email),
            company_website: ActiveValue::Set(params.company_website),
            tags: ActiveValue::Set(serde_json::json!(params.tags)),
            status: ActiveValue::Set(params.status),
            tier: ActiveValue::Set(params.tier),
            featured: ActiveValue::Set(params.featured),
            verified: ActiveValue::Set(false),
            urgent: ActiveValue::Set(false),
            highlighted: ActiveValue::Set(false),
            payment_status: ActiveValue::Set(params.payment_status),
            payment_amount: ActiveValue::Set(params.payment_amount),
            payment_session_id: ActiveValue::Set(None),
            payment_ref: ActiveValue::Set(None),
            published_at: ActiveValue::Set(None),
            expires_at: ActiveValue::Set(params.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a job by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(id).one(self.db).await
    }

    /// Finds a job by slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets all publicly visible jobs, featured first then newest.
    pub async fn list_published(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(Self::visible_condition(now))
            .order_by_desc(entity::job::Column::Featured)
            .order_by_desc(entity::job::Column::PublishedAt)
            .all(self.db)
            .await
    }

    /// Gets all jobs for administrators, optionally narrowed by status,
    /// newest first.
    pub async fn list_all(
        &self,
        status: Option<JobStatus>,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        let mut query = entity::prelude::Job::find();

        if let Some(status) = status {
            query = query.filter(entity::job::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::job::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Searches published jobs with ranking and pagination.
    ///
    /// Returns the page of jobs and the total count under the same predicate,
    /// independent of limit/offset.
    pub async fn search(
        &self,
        filter: &JobFilter,
        now: DateTime<Utc>,
    ) -> Result<(Vec<entity::job::Model>, u64), DbErr> {
        let condition = Self::filter_condition(filter, now);

        let total = entity::prelude::Job::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let jobs = entity::prelude::Job::find()
            .filter(condition)
            .order_by_desc(entity::job::Column::Featured)
            .order_by_desc(entity::job::Column::Tier)
            .order_by_desc(entity::job::Column::Verified)
            .order_by_desc(entity::job::Column::Urgent)
            .order_by_desc(entity::job::Column::Highlighted)
            .order_by_desc(entity::job::Column::PublishedAt)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(self.db)
            .await?;

        Ok((jobs, total))
    }

    /// Predicate for publicly visible jobs: published and not expired.
    pub fn visible_condition(now: DateTime<Utc>) -> Condition {
        Condition::all()
            .add(entity::job::Column::Status.eq(JobStatus::Published))
            .add(
                Condition::any()
                    .add(entity::job::Column::ExpiresAt.is_null())
                    .add(entity::job::Column::ExpiresAt.gt(now)),
            )
    }

    /// Translates a job filter into a query condition.
    ///
    /// Only publicly visible jobs are eligible. A free-text query matches
    /// title, company or description as a case-insensitive substring, or any
    /// normalized query token present in the tag set. Location narrows by
    /// substring; job type, work location and tier narrow by equality.
    pub fn filter_condition(filter: &JobFilter, now: DateTime<Utc>) -> Condition {
        let mut condition = Self::visible_condition(now);

        if let Some(query) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let mut text = Condition::any()
                .add(contains_insensitive(entity::job::Column::JobTitle, query))
                .add(contains_insensitive(entity::job::Column::CompanyName, query))
                .add(contains_insensitive(entity::job::Column::Description, query));
            for token in tokenize(query) {
                text = text.add(tag_contains(entity::job::Column::Tags, &token));
            }
            condition = condition.add(text);
        }

        if let Some(location) = filter.location.as_deref().filter(|l| !l.is_empty()) {
            condition = condition.add(contains_insensitive(
                entity::job::Column::Location,
                location,
            ));
        }

        if let Some(job_type) = filter.job_type.as_deref().filter(|t| !t.is_empty()) {
            condition = condition.add(entity::job::Column::JobType.eq(job_type));
        }

        if let Some(work_location) = filter.work_location.as_deref().filter(|w| !w.is_empty()) {
            condition = condition.add(entity::job::Column::WorkLocation.eq(work_location));
        }

        if let Some(tier) = filter.tier {
            condition = condition.add(entity::job::Column::Tier.eq(tier));
        }

        condition
    }

    /// Stores the checkout session id created for a payment-pending job.
    pub async fn set_payment_session(
        &self,
        id: i32,
        session_id: String,
    ) -> Result<entity::job::Model, DbErr> {
        let job = self.require(id).await?;

        let mut active_model: entity::job::ActiveModel = job.into();
        active_model.payment_session_id = ActiveValue::Set(Some(session_id));

        active_model.update(self.db).await
    }

    /// Marks a job paid and published, recording the payment reference.
    ///
    /// Idempotent: `published_at` is only stamped the first time, and
    /// re-applying the same payment reference is a no-op.
    pub async fn mark_published(
        &self,
        id: i32,
        payment_ref: Option<String>,
    ) -> Result<entity::job::Model, DbErr> {
        let job = self.require(id).await?;

        let published_at = job.published_at;
        let mut active_model: entity::job::ActiveModel = job.into();
        active_model.payment_status = ActiveValue::Set(PaymentStatus::Paid);
        active_model.status = ActiveValue::Set(JobStatus::Published);
        if published_at.is_none() {
            active_model.published_at = ActiveValue::Set(Some(Utc::now()));
        }
        if let Some(payment_ref) = payment_ref {
            active_model.payment_ref = ActiveValue::Set(Some(payment_ref));
        }

        active_model.update(self.db).await
    }

    /// Applies an administrative status/schedule update.
    ///
    /// Publishing a job stamps `published_at` when no explicit timestamp is
    /// supplied and none is recorded yet.
    pub async fn update_admin(
        &self,
        id: i32,
        status: Option<JobStatus>,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<entity::job::Model, DbErr> {
        let job = self.require(id).await?;

        let current_published_at = job.published_at;
        let mut active_model: entity::job::ActiveModel = job.into();

        if let Some(status) = status {
            active_model.status = ActiveValue::Set(status);
            if status == JobStatus::Published
                && published_at.is_none()
                && current_published_at.is_none()
            {
                active_model.published_at = ActiveValue::Set(Some(Utc::now()));
            }
        }
        if let Some(published_at) = published_at {
            active_model.published_at = ActiveValue::Set(Some(published_at));
        }

        active_model.update(self.db).await
    }

    /// Deletes a job posting.
    ///
    /// # Returns
    /// - `Ok(true)` - Job deleted
    /// - `Ok(false)` - No job with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Job::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn require(&self, id: i32) -> Result<entity::job::Model, DbErr> {
        entity::prelude::Job::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Job with id {} not found",
                id
            )))
    }
}
