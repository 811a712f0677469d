use entity::sea_orm_active_enums::ServerStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::{category::CategoryRepository, server::AcpServerRepository},
    error::AppError,
    model::server::{AcpServerDto, ServerFilter, ServerSearchDto, UpdateServerDto},
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches active listings with ranking, filtering, and pagination.
    ///
    /// A category filter naming an unknown slug yields an empty page rather
    /// than an error, mirroring how an empty directory section renders.
    pub async fn search(&self, filter: ServerFilter) -> Result<ServerSearchDto, AppError> {
        let category_id = match filter.category.as_deref().filter(|c| !c.is_empty()) {
            Some(slug) => {
                let categories = CategoryRepository::new(self.db);
                match categories.find_by_slug(slug).await? {
                    Some(category) => Some(category.id),
                    None => {
                        return Ok(ServerSearchDto {
                            servers: Vec::new(),
                            total_count: 0,
                            has_more: false,
                            query: filter.query,
                            category: filter.category,
                        })
                    }
                }
            }
            None => None,
        };

        let repo = AcpServerRepository::new(self.db);
        let (servers, total_count) = repo.search(&filter, category_id).await?;

        let has_more = filter.offset + (servers.len() as u64) < total_count;

        Ok(ServerSearchDto {
            servers: servers
                .into_iter()
                .map(|(server, category)| AcpServerDto::from_entity(server, category))
                .collect(),
            total_count,
            has_more,
            query: filter.query,
            category: filter.category,
        })
    }

    /// Applies an administrative update; only approval is a legal transition.
    pub async fn update(&self, id: i32, dto: UpdateServerDto) -> Result<AcpServerDto, AppError> {
        match dto.status {
            Some(ServerStatus::Active) => self.approve(id).await,
            _ => Err(AppError::BadRequest(
                "Only approval to active is supported".to_string(),
            )),
        }
    }

    /// Approves a pending listing: `pending → active`, stamping
    /// `published_at`.
    pub async fn approve(&self, id: i32) -> Result<AcpServerDto, AppError> {
        let repo = AcpServerRepository::new(self.db);
        let server = repo.approve(id).await.map_err(|err| match err {
            sea_orm::DbErr::RecordNotFound(_) => {
                AppError::NotFound("Server not found".to_string())
            }
            other => other.into(),
        })?;

        Ok(AcpServerDto::from_entity(server, None))
    }

    /// Deletes a listing (administrative reject). Rejection is a hard delete;
    /// no soft-delete state exists.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AcpServerRepository::new(self.db);
        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Server not found".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// An unknown category slug yields an empty page, not an error.
    #[tokio::test]
    async fn unknown_category_yields_empty_page() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let category = factory::category::create_category(db).await?;
        factory::acp_server::create_server(db, category.id).await?;

        let result = ServerService::new(db)
            .search(ServerFilter {
                category: Some("missing-category".to_string()),
                ..Default::default()
            })
            .await?;

        assert!(result.servers.is_empty());
        assert_eq!(result.total_count, 0);
        assert!(!result.has_more);

        Ok(())
    }

    /// Approval activates the pending listing and stamps `published_at`;
    /// re-approving keeps the original timestamp.
    #[tokio::test]
    async fn approve_activates_pending_listing() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let category = factory::category::create_category(db).await?;
        let server = factory::acp_server::AcpServerFactory::new(db, category.id)
            .status(entity::sea_orm_active_enums::ServerStatus::Pending)
            .build()
            .await?;
        assert!(server.published_at.is_none());

        let service = ServerService::new(db);
        let approved = service.approve(server.id).await?;
        assert_eq!(approved.status, ServerStatus::Active);
        let first_published_at = approved.published_at.unwrap();

        let reapproved = service.approve(server.id).await?;
        assert_eq!(reapproved.published_at, Some(first_published_at));

        Ok(())
    }

    #[tokio::test]
    async fn rejecting_missing_server_is_not_found() {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let err = ServerService::new(db).delete(9999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
