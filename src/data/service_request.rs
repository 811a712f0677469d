use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::service_request::CreateServiceRequestParams;

pub struct ServiceRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new service request in the "new" intake status.
    pub async fn create(
        &self,
        params: CreateServiceRequestParams,
    ) -> Result<entity::service_request::Model, DbErr> {
        entity::service_request::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            company: ActiveValue::Set(params.company),
            phone: ActiveValue::Set(params.phone),
            project_type: ActiveValue::Set(params.project_type),
            description: ActiveValue::Set(params.description),
            budget: ActiveValue::Set(params.budget),
            timeline: ActiveValue::Set(params.timeline),
            status: ActiveValue::Set("new".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all service requests, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::service_request::Model>, DbErr> {
        entity::prelude::ServiceRequest::find()
            .order_by_desc(entity::service_request::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
