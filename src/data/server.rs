use chrono::Utc;
use entity::sea_orm_active_enums::{ServerStatus, Tier};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    data::{contains_insensitive, tag_contains},
    model::server::{CreateServerParams, ServerFilter},
    util::tags::tokenize,
};

pub struct AcpServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcpServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new server listing.
    pub async fn create(
        &self,
        params: CreateServerParams,
    ) -> Result<entity::acp_server::Model, DbErr> {
        entity::acp_server::ActiveModel {
            slug: ActiveValue::Set(params.slug),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            website: ActiveValue::Set(params.website),
            github_url: ActiveValue::Set(params.github_url),
            logo_url: ActiveValue::Set(params.logo_url),
            primary_category_id: ActiveValue::Set(params.primary_category_id),
            tags: ActiveValue::Set(serde_json::json!(params.tags)),
            protocol_support: ActiveValue::Set(serde_json::json!(params.protocol_support)),
            api_endpoint: ActiveValue::Set(params.api_endpoint),
            api_key_required: ActiveValue::Set(params.api_key_required),
            submitter_name: ActiveValue::Set(params.submitter_name),
            submitter_email: ActiveValue::Set(params.submitter_email),
            submitter_company: ActiveValue::Set(params.submitter_company),
            status: ActiveValue::Set(params.status),
            tier: ActiveValue::Set(params.tier),
            featured: ActiveValue::Set(params.featured),
            verified: ActiveValue::Set(params.verified),
            stars: ActiveValue::Set(params.stars),
            downloads: ActiveValue::Set(params.downloads),
            custom_profile: ActiveValue::Set(params.custom_profile),
            lead_generation: ActiveValue::Set(params.lead_generation),
            analytics_enabled: ActiveValue::Set(params.analytics_enabled),
            published_at: ActiveValue::Set(params.published_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a server by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::acp_server::Model>, DbErr> {
        entity::prelude::AcpServer::find_by_id(id).one(self.db).await
    }

    /// Finds a server by slug.
    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::acp_server::Model>, DbErr> {
        entity::prelude::AcpServer::find()
            .filter(entity::acp_server::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Checks whether a slug is already taken.
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AcpServer::find()
            .filter(entity::acp_server::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Searches active listings with ranking and pagination.
    ///
    /// Returns the page of servers (with their joined category) and the total
    /// count under the same predicate, independent of limit/offset.
    pub async fn search(
        &self,
        filter: &ServerFilter,
        category_id: Option<i32>,
    ) -> Result<
        (
            Vec<(entity::acp_server::Model, Option<entity::category::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let condition = Self::filter_condition(filter, category_id);

        let total = entity::prelude::AcpServer::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let servers = entity::prelude::AcpServer::find()
            .filter(condition)
            .order_by_desc(entity::acp_server::Column::Featured)
            .order_by_desc(entity::acp_server::Column::Tier)
            .order_by_desc(entity::acp_server::Column::Verified)
            .order_by_desc(entity::acp_server::Column::Stars)
            .order_by_desc(entity::acp_server::Column::CreatedAt)
            .limit(filter.limit)
            .offset(filter.offset)
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        Ok((servers, total))
    }

    /// Translates a server filter into a query condition.
    ///
    /// Only active listings are eligible. A free-text query matches name or
    /// description as a case-insensitive substring, or any normalized query
    /// token present in the tag set. The category filter narrows by the
    /// already-resolved category id.
    pub fn filter_condition(filter: &ServerFilter, category_id: Option<i32>) -> Condition {
        let mut condition = Condition::all()
            .add(entity::acp_server::Column::Status.eq(ServerStatus::Active));

        // The page query joins category, which also has name and description
        // columns; qualify ours to keep the predicate unambiguous.
        if let Some(query) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let mut text = Condition::any()
                .add(contains_insensitive(
                    (entity::acp_server::Entity, entity::acp_server::Column::Name),
                    query,
                ))
                .add(contains_insensitive(
                    (
                        entity::acp_server::Entity,
                        entity::acp_server::Column::Description,
                    ),
                    query,
                ));
            for token in tokenize(query) {
                text = text.add(tag_contains(
                    (entity::acp_server::Entity, entity::acp_server::Column::Tags),
                    &token,
                ));
            }
            condition = condition.add(text);
        }

        if let Some(category_id) = category_id {
            condition =
                condition.add(entity::acp_server::Column::PrimaryCategoryId.eq(category_id));
        }

        condition
    }

    /// Approves a pending listing: activates it and stamps `published_at`.
    ///
    /// Idempotent; an already-active listing keeps its original timestamp.
    pub async fn approve(&self, id: i32) -> Result<entity::acp_server::Model, DbErr> {
        let server = entity::prelude::AcpServer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "ACP server with id {} not found",
                id
            )))?;

        let published_at = server.published_at;
        let mut active_model: entity::acp_server::ActiveModel = server.into();
        active_model.status = ActiveValue::Set(ServerStatus::Active);
        if published_at.is_none() {
            active_model.published_at = ActiveValue::Set(Some(Utc::now()));
        }

        active_model.update(self.db).await
    }

    /// Updates the tier and the premium feature flags of a listing.
    ///
    /// Used by the payment reconciler for subscription upgrades, downgrades,
    /// and cancellations.
    pub async fn update_tier_flags(
        &self,
        id: i32,
        tier: Tier,
        featured: bool,
    ) -> Result<entity::acp_server::Model, DbErr> {
        let server = entity::prelude::AcpServer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "ACP server with id {} not found",
                id
            )))?;

        let premium = tier.is_premium();
        let mut active_model: entity::acp_server::ActiveModel = server.into();
        active_model.tier = ActiveValue::Set(tier);
        active_model.featured = ActiveValue::Set(featured);
        active_model.custom_profile = ActiveValue::Set(premium);
        active_model.lead_generation = ActiveValue::Set(premium);
        active_model.analytics_enabled = ActiveValue::Set(premium);

        active_model.update(self.db).await
    }

    /// Deletes a listing.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing deleted
    /// - `Ok(false)` - No listing with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AcpServer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

}
