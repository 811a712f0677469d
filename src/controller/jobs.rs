use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::JobStatus;
use serde::{Deserialize, Serialize};

use crate::{
    error::{payment::PaymentError, AppError},
    middleware::admin::AdminGuard,
    model::{
        api::MessageDto,
        job::{CheckoutJobDto, JobFilter, PostJobDto, UpdateJobDto},
    },
    service::job::JobService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct ListJobsQuery {
    #[serde(default)]
    pub status: Option<JobStatus>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JobListDto<T> {
    success: bool,
    count: usize,
    jobs: Vec<T>,
}

#[derive(Deserialize)]
pub struct VerifyPaymentQuery {
    pub session_id: Option<String>,
    pub job_id: Option<i32>,
}

/// POST /api/jobs
/// Post a free job; it awaits administrative approval before publishing.
pub async fn post_job(
    State(state): State<AppState>,
    Json(dto): Json<PostJobDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = JobService::new(&state.db);
    let response = service.post_free(dto).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/jobs
/// List published jobs; with the admin key, list all jobs, optionally
/// narrowed by status.
pub async fn list_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListJobsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = JobService::new(&state.db);

    if AdminGuard::new(&state.admin_api_key).is_admin(&headers) {
        let jobs = service.list_admin(query.status).await?;
        return Ok((
            StatusCode::OK,
            Json(JobListDto {
                success: true,
                count: jobs.len(),
                jobs,
            })
            .into_response(),
        ));
    }

    let jobs = service.list_public().await?;
    Ok((
        StatusCode::OK,
        Json(JobListDto {
            success: true,
            count: jobs.len(),
            jobs,
        })
        .into_response(),
    ))
}

/// GET /api/jobs/search
/// Search published jobs with ranking, filtering, and pagination.
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<impl IntoResponse, AppError> {
    let service = JobService::new(&state.db);
    let results = service.search(filter).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// POST /api/jobs/checkout
/// Post a paid job and return the checkout redirect URL.
pub async fn checkout_job(
    State(state): State<AppState>,
    Json(dto): Json<CheckoutJobDto>,
) -> Result<impl IntoResponse, AppError> {
    let payments = state.payments.as_ref().ok_or(PaymentError::NotConfigured)?;

    let service = JobService::new(&state.db);
    let response = service.checkout(dto, payments, &state.app_url).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/jobs/verify-payment
/// Synchronously verify a checkout session and publish the job.
pub async fn verify_payment(
    State(state): State<AppState>,
    Query(query): Query<VerifyPaymentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(session_id), Some(job_id)) = (query.session_id, query.job_id) else {
        return Err(AppError::BadRequest(
            "Missing session_id or job_id".to_string(),
        ));
    };

    let payments = state.payments.as_ref().ok_or(PaymentError::NotConfigured)?;

    let service = JobService::new(&state.db);
    let response = service
        .verify_payment(&session_id, job_id, payments)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// PATCH /api/jobs/{id}
/// Approve or reschedule a job posting (admin).
pub async fn update_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateJobDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_key).require(&headers)?;

    let service = JobService::new(&state.db);
    let job = service.update(id, dto).await?;

    Ok((StatusCode::OK, Json(job)))
}

/// DELETE /api/jobs/{id}
/// Reject a job posting by deleting it outright (admin).
pub async fn delete_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_key).require(&headers)?;

    let service = JobService::new(&state.db);
    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            success: true,
            message: "Job deleted successfully".to_string(),
        }),
    ))
}
