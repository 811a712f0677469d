use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    data::service_request::ServiceRequestRepository,
    error::AppError,
    middleware::admin::AdminGuard,
    model::service_request::{
        CreateServiceRequestDto, CreateServiceRequestParams, CreateServiceRequestResponseDto,
        ServiceRequestDto, ServiceRequestListDto,
    },
    state::AppState,
    util::validate::is_valid_email,
};

/// POST /api/services
/// Submit a service request.
pub async fn create_service_request(
    State(state): State<AppState>,
    Json(dto): Json<CreateServiceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let name = required(&dto.name, "Name is required")?;
    let email = required(&dto.email, "Email is required")?;
    let project_type = required(&dto.project_type, "Project type is required")?;
    let description = required(&dto.description, "Project description is required")?;

    if !is_valid_email(&email) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }

    let repo = ServiceRequestRepository::new(&state.db);
    let request = repo
        .create(CreateServiceRequestParams {
            name,
            email: email.to_lowercase(),
            company: dto.company,
            phone: dto.phone,
            project_type,
            description,
            budget: dto.budget,
            timeline: dto.timeline,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateServiceRequestResponseDto {
            success: true,
            message: "Service request submitted successfully! We'll contact you within 24 hours."
                .to_string(),
            id: request.id,
        }),
    ))
}

/// GET /api/services
/// List service requests (admin).
pub async fn list_service_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_key).require(&headers)?;

    let repo = ServiceRequestRepository::new(&state.db);
    let requests: Vec<ServiceRequestDto> = repo
        .get_all()
        .await?
        .into_iter()
        .map(ServiceRequestDto::from_entity)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ServiceRequestListDto {
            success: true,
            count: requests.len(),
            requests,
        }),
    ))
}

fn required(value: &Option<String>, message: &str) -> Result<String, AppError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}
