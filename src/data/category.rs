use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by their display sort order.
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::SortOrder)
            .all(self.db)
            .await
    }

    /// Finds a category by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Finds a category by its slug.
    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Upserts a category keyed by slug.
    ///
    /// Inserts a new taxonomy node or refreshes the display metadata of an
    /// existing one. Used by the seed binary so reseeding is repeatable.
    pub async fn upsert(
        &self,
        slug: String,
        name: String,
        description: String,
        icon: String,
        color: String,
        sort_order: i32,
    ) -> Result<entity::category::Model, DbErr> {
        entity::prelude::Category::insert(entity::category::ActiveModel {
            slug: ActiveValue::Set(slug),
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            icon: ActiveValue::Set(icon),
            color: ActiveValue::Set(color),
            sort_order: ActiveValue::Set(sort_order),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::category::Column::Slug)
                .update_columns([
                    entity::category::Column::Name,
                    entity::category::Column::Description,
                    entity::category::Column::Icon,
                    entity::category::Column::Color,
                    entity::category::Column::SortOrder,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
