use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for the service-request intake form.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequestDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateServiceRequestResponseDto {
    pub success: bool,
    pub message: String,
    pub id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub project_type: String,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ServiceRequestDto {
    pub fn from_entity(entity: entity::service_request::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            company: entity.company,
            phone: entity.phone,
            project_type: entity.project_type,
            description: entity.description,
            budget: entity.budget,
            timeline: entity.timeline,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ServiceRequestListDto {
    pub success: bool,
    pub count: usize,
    pub requests: Vec<ServiceRequestDto>,
}

/// Parameters for inserting a new service request.
#[derive(Debug, Clone)]
pub struct CreateServiceRequestParams {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub project_type: String,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}
