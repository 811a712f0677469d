//! ACP server factory for creating test directory listings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{ServerStatus, Tier};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ACP servers with customizable fields.
///
/// Defaults produce an active, free-tier, unranked listing. Listings built with
/// `ServerStatus::Active` get `published_at` set automatically unless overridden.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::acp_server::AcpServerFactory;
///
/// let server = AcpServerFactory::new(&db, category.id)
///     .name("Stripe ACP Server")
///     .tier(Tier::Featured)
///     .featured(true)
///     .tags(vec!["payments", "commerce"])
///     .build()
///     .await?;
/// ```
pub struct AcpServerFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    slug: String,
    name: String,
    description: String,
    status: ServerStatus,
    tier: Tier,
    featured: bool,
    verified: bool,
    stars: i32,
    tags: Vec<String>,
}

impl<'a> AcpServerFactory<'a> {
    /// Creates a new AcpServerFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"server-{id}"` where id is auto-incremented
    /// - name: `"Server {id}"`
    /// - status: `Active`, tier: `Free`, featured/verified: `false`, stars: `0`
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            slug: format!("server-{}", id),
            name: format!("Server {}", id),
            description: format!("Server {} description", id),
            status: ServerStatus::Active,
            tier: Tier::Free,
            featured: false,
            verified: false,
            stars: 0,
            tags: Vec::new(),
        }
    }

    /// Sets the slug for the server.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the display name for the server.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the server.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the lifecycle status for the server.
    pub fn status(mut self, status: ServerStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the paid tier for the server.
    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the featured flag for the server.
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Sets the verified flag for the server.
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Sets the community star count for the server.
    pub fn stars(mut self, stars: i32) -> Self {
        self.stars = stars;
        self
    }

    /// Sets the tag tokens for the server.
    pub fn tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(String::from).collect();
        self
    }

    /// Builds and inserts the ACP server entity into the database.
    pub async fn build(self) -> Result<entity::acp_server::Model, DbErr> {
        let now = Utc::now();
        let published_at = match self.status {
            ServerStatus::Active => Some(now),
            ServerStatus::Pending => None,
        };

        entity::acp_server::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            website: ActiveValue::Set(None),
            github_url: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            primary_category_id: ActiveValue::Set(self.category_id),
            tags: ActiveValue::Set(serde_json::json!(self.tags)),
            protocol_support: ActiveValue::Set(serde_json::json!(["ACP v0.3"])),
            api_endpoint: ActiveValue::Set(None),
            api_key_required: ActiveValue::Set(false),
            submitter_name: ActiveValue::Set(None),
            submitter_email: ActiveValue::Set(None),
            submitter_company: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            tier: ActiveValue::Set(self.tier),
            featured: ActiveValue::Set(self.featured),
            verified: ActiveValue::Set(self.verified),
            stars: ActiveValue::Set(self.stars),
            downloads: ActiveValue::Set(0),
            custom_profile: ActiveValue::Set(false),
            lead_generation: ActiveValue::Set(false),
            analytics_enabled: ActiveValue::Set(false),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active free-tier server with default values.
///
/// Shorthand for `AcpServerFactory::new(db, category_id).build().await`.
pub async fn create_server(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::acp_server::Model, DbErr> {
    AcpServerFactory::new(db, category_id).build().await
}
