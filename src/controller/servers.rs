use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::admin::AdminGuard,
    model::{
        api::MessageDto,
        server::{ServerFilter, UpdateServerDto},
    },
    service::server::ServerService,
    state::AppState,
};

/// GET /api/search
/// Search active server listings with ranking and pagination.
pub async fn search_servers(
    State(state): State<AppState>,
    Query(filter): Query<ServerFilter>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServerService::new(&state.db);
    let results = service.search(filter).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// PATCH /api/servers/{id}
/// Approve a pending listing (admin).
pub async fn update_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateServerDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_key).require(&headers)?;

    let service = ServerService::new(&state.db);
    let server = service.update(id, dto).await?;

    Ok((StatusCode::OK, Json(server)))
}

/// DELETE /api/servers/{id}
/// Reject a listing by deleting it outright (admin).
pub async fn delete_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.admin_api_key).require(&headers)?;

    let service = ServerService::new(&state.db);
    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            success: true,
            message: "Server deleted successfully".to_string(),
        }),
    ))
}
