use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::comment::CommentRepository,
    dto::{
        api::ErrorDto,
        comment::{CommentsDto, CreateCommentDto, PatchCommentDto, SingleCommentDto},
    },
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
    state::AppState,
    util::parse::parse_id,
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comments";

static INCOMPLETE_INFORMATION: &str = "Bad request - incomplete information";

/// Get all comments on a review.
///
/// Returns the review's comments sorted by creation date descending. A
/// review with no comments yields an empty array, not a 404.
///
/// # Arguments
/// - `review_id` - Review id path segment, validated as integer-shaped
///
/// # Returns
/// - `200 OK` - Comments wrapped in `{ "comments": [...] }`
/// - `400 Bad Request` - The id segment is not integer-shaped
/// - `404 Not Found` - No review with that id exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Comments on the review, newest first", body = CommentsDto),
        (status = 400, description = "Malformed review id", body = ErrorDto),
        (status = 404, description = "No such review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_comments(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id(&review_id)?;

    let repo = CommentRepository::new(&state.db);

    let comments = repo.get_for_review(review_id).await?;

    Ok((
        StatusCode::OK,
        Json(CommentsDto {
            comments: comments.into_iter().map(Comment::into_dto).collect(),
        }),
    ))
}

/// Create a comment on a review.
///
/// Requires a JSON body with non-empty `username` and `body`; extraneous
/// fields (including a client-supplied `votes`) are ignored and the stored
/// votes always start at 0. The payload is shape-checked before any query
/// is issued.
///
/// # Arguments
/// - `review_id` - Review id path segment, validated as integer-shaped
/// - `payload` - Comment creation body; absent, non-JSON, or unparsable
///   bodies arrive as a rejection and map to the fixed 400 message
///
/// # Returns
/// - `201 Created` - The new comment wrapped in `{ "comment": {...} }`
/// - `400 Bad Request` - Malformed id, or missing/empty username or body
/// - `404 Not Found` - The username or the review does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = String, Path, description = "Review id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "The created comment", body = SingleCommentDto),
        (status = 400, description = "Malformed id or incomplete payload", body = ErrorDto),
        (status = 404, description = "Unknown username or review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review_comment(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id(&review_id)?;

    let Ok(Json(payload)) = payload else {
        return Err(AppError::BadRequest(INCOMPLETE_INFORMATION.to_string()));
    };

    let username = payload.username.filter(|u| !u.trim().is_empty());
    let body = payload.body.filter(|b| !b.trim().is_empty());

    let (Some(username), Some(body)) = (username, body) else {
        return Err(AppError::BadRequest(INCOMPLETE_INFORMATION.to_string()));
    };

    let repo = CommentRepository::new(&state.db);

    let comment = repo
        .insert(CreateCommentParams {
            review_id,
            username,
            body,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SingleCommentDto {
            comment: comment.into_dto(),
        }),
    ))
}

/// Increment a comment's votes.
///
/// Adds `inc_votes` (which may be negative) to the votes of a single
/// comment, keyed by comment id.
///
/// # Arguments
/// - `comment_id` - Comment id path segment, validated as integer-shaped
/// - `payload` - `{ "inc_votes": <integer> }`; absent, non-JSON, or
///   unparsable bodies arrive as a rejection and map to the fixed 400 message
///
/// # Returns
/// - `200 OK` - The updated comment wrapped in `{ "comment": {...} }`
/// - `400 Bad Request` - Malformed id, or missing `inc_votes`
/// - `404 Not Found` - No comment with that id exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment id")
    ),
    request_body = PatchCommentDto,
    responses(
        (status = 200, description = "The updated comment", body = SingleCommentDto),
        (status = 400, description = "Malformed id or missing inc_votes", body = ErrorDto),
        (status = 404, description = "No such comment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_comment_votes(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    payload: Result<Json<PatchCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id(&comment_id)?;

    let inc_votes = payload.ok().and_then(|Json(p)| p.inc_votes);

    let Some(inc_votes) = inc_votes else {
        return Err(AppError::BadRequest(INCOMPLETE_INFORMATION.to_string()));
    };

    let repo = CommentRepository::new(&state.db);

    let comment = repo.increment_votes(comment_id, inc_votes).await?;

    Ok((
        StatusCode::OK,
        Json(SingleCommentDto {
            comment: comment.into_dto(),
        }),
    ))
}
