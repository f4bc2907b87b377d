use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::review::ReviewRepository,
    dto::{
        api::ErrorDto,
        review::{ReviewsDto, SingleReviewDto},
    },
    error::AppError,
    model::review::ReviewSummary,
    state::AppState,
    util::parse::parse_id,
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "reviews";

/// Get all reviews with their comment counts.
///
/// Returns the review listing sorted by creation date descending (newest
/// first). Each entry carries the derived `comment_count` and omits the
/// review body text.
///
/// # Returns
/// - `200 OK` - All reviews wrapped in `{ "reviews": [...] }`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "All reviews, newest first", body = ReviewsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let repo = ReviewRepository::new(&state.db);

    let reviews = repo.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ReviewsDto {
            reviews: reviews.into_iter().map(ReviewSummary::into_dto).collect(),
        }),
    ))
}

/// Get a single review by id.
///
/// # Arguments
/// - `review_id` - Review id path segment, validated as integer-shaped
///
/// # Returns
/// - `200 OK` - The review wrapped in `{ "review": {...} }`
/// - `400 Bad Request` - The id segment is not integer-shaped
/// - `404 Not Found` - No review with that id exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "The requested review", body = SingleReviewDto),
        (status = 400, description = "Malformed review id", body = ErrorDto),
        (status = 404, description = "No such review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id(&review_id)?;

    let repo = ReviewRepository::new(&state.db);

    let review = repo.find_by_id(review_id).await?;

    Ok((
        StatusCode::OK,
        Json(SingleReviewDto {
            review: review.into_dto(),
        }),
    ))
}
