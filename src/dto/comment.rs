use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub author: String,
    pub review_id: i32,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CommentsDto {
    pub comments: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SingleCommentDto {
    pub comment: CommentDto,
}

/// Payload for comment creation. Both fields are required on the wire;
/// extraneous fields (such as a client-supplied `votes`) are ignored.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub username: Option<String>,
    pub body: Option<String>,
}

/// Payload for the comment vote increment. `inc_votes` may be negative.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PatchCommentDto {
    pub inc_votes: Option<i32>,
}
