use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::category::CategoryRepository,
    dto::{api::ErrorDto, category::CategoriesDto},
    error::AppError,
    model::category::Category,
    state::AppState,
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "categories";

/// Get all board-game categories.
///
/// # Returns
/// - `200 OK` - All categories wrapped in `{ "categories": [...] }`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = CategoriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let repo = CategoryRepository::new(&state.db);

    let categories = repo.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(CategoriesDto {
            categories: categories.into_iter().map(Category::into_dto).collect(),
        }),
    ))
}
