//! Category factory for creating test taxonomy entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    name: String,
    sort_order: i32,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"category-{id}"` where id is auto-incremented
    /// - name: `"Category {id}"`
    /// - sort_order: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("category-{}", id),
            name: format!("Category {}", id),
            sort_order: 0,
        }
    }

    /// Sets the slug for the category.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the display name for the category.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sort order for the category.
    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            name: ActiveValue::Set(self.name.clone()),
            description: ActiveValue::Set(format!("{} description", self.name)),
            icon: ActiveValue::Set("🔧".to_string()),
            color: ActiveValue::Set("#3b82f6".to_string()),
            sort_order: ActiveValue::Set(self.sort_order),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Creates a category with a specific slug.
pub async fn create_category_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).slug(slug).build().await
}
