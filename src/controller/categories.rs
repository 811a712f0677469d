use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::category::CategoryRepository, error::AppError, model::category::CategoryDto,
    state::AppState,
};

/// GET /api/categories
/// Get the category taxonomy in display order.
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let repo = CategoryRepository::new(&state.db);
    let categories: Vec<CategoryDto> = repo
        .get_all()
        .await?
        .into_iter()
        .map(CategoryDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(categories)))
}
