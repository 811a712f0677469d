use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::submission::{GetSubmissionQuery, SubmitAcpDto},
    service::submission::SubmissionService,
    state::AppState,
};

/// POST /api/acp/submit
/// Submit an ACP server listing; free tier goes to review, paid tiers get a
/// checkout redirect.
pub async fn submit_acp(
    State(state): State<AppState>,
    Json(dto): Json<SubmitAcpDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);
    let response = service
        .submit(dto, state.payments.as_ref(), &state.app_url)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/acp/submit
/// Look up a submission by id, or the most recent one for an email.
pub async fn get_submission(
    State(state): State<AppState>,
    Query(query): Query<GetSubmissionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);
    let submission = service.find(query).await?;

    Ok((StatusCode::OK, Json(submission)))
}
