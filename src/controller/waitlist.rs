use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    data::waitlist::WaitlistRepository,
    error::AppError,
    middleware::admin::AdminGuard,
    model::waitlist::{
        JoinWaitlistDto, JoinWaitlistResponseDto, WaitlistEntryDto, WaitlistListDto,
    },
    state::AppState,
    util::validate::is_valid_email,
};

/// POST /api/waitlist
/// Join the waitlist; a repeat signup for the same email updates the
/// existing entry instead of creating a duplicate.
pub async fn join_waitlist(
    State(state): State<AppState>,
    Json(dto): Json<JoinWaitlistDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = dto
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::BadRequest("Email is required".to_string()))?;

    if !is_valid_email(email) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }

    let repo = WaitlistRepository::new(&state.db);
    let entry = repo
        .upsert(email.to_lowercase(), dto.tools, dto.consent.unwrap_or(false))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinWaitlistResponseDto {
            success: true,
            message: "Successfully joined the waitlist!".to_string(),
            id: entry.id,
        }),
    ))
}

/// GET /api/waitlist
/// List waitlist entries (admin).
pub async fn list_waitlist(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_key).require(&headers)?;

    let repo = WaitlistRepository::new(&state.db);
    let entries: Vec<WaitlistEntryDto> = repo
        .get_all()
        .await?
        .into_iter()
        .map(WaitlistEntryDto::from_entity)
        .collect();

    Ok((
        StatusCode::OK,
        Json(WaitlistListDto {
            success: true,
            count: entries.len(),
            entries,
        }),
    ))
}
