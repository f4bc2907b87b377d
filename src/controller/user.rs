use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::user::UserRepository,
    dto::{api::ErrorDto, user::UsersDto},
    error::AppError,
    model::user::User,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Get all users.
///
/// # Returns
/// - `200 OK` - All users wrapped in `{ "users": [...] }`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = UsersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let repo = UserRepository::new(&state.db);

    let users = repo.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(UsersDto {
            users: users.into_iter().map(User::into_dto).collect(),
        }),
    ))
}
