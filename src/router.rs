//! Axum route configuration and API documentation.

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{category, comment, review, user},
    dto::api::ErrorDto,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::category::get_categories,
        crate::controller::review::get_reviews,
        crate::controller::review::get_review,
        crate::controller::comment::get_review_comments,
        crate::controller::comment::create_review_comment,
        crate::controller::comment::patch_comment_votes,
        crate::controller::user::get_users,
    ),
    components(schemas(
        crate::dto::api::ErrorDto,
        crate::dto::category::CategoryDto,
        crate::dto::category::CategoriesDto,
        crate::dto::review::ReviewDto,
        crate::dto::review::ReviewSummaryDto,
        crate::dto::review::ReviewsDto,
        crate::dto::review::SingleReviewDto,
        crate::dto::comment::CommentDto,
        crate::dto::comment::CommentsDto,
        crate::dto::comment::SingleCommentDto,
        crate::dto::comment::CreateCommentDto,
        crate::dto::comment::PatchCommentDto,
        crate::dto::user::UserDto,
        crate::dto::user::UsersDto,
    ))
)]
pub struct ApiDoc;

/// Builds the API route table.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(category::get_categories))
        .route("/api/reviews", get(review::get_reviews))
        .route("/api/reviews/{review_id}", get(review::get_review))
        .route(
            "/api/reviews/{review_id}/comments",
            get(comment::get_review_comments).post(comment::create_review_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(comment::patch_comment_votes),
        )
        .route("/api/users", get(user::get_users))
}

/// Builds the complete application: API routes, swagger documentation, the
/// not-found fallback, and the trace/CORS layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(path_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Fallback for unmatched paths, regardless of HTTP method.
async fn path_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            msg: "Path not found".to_string(),
        }),
    )
}
