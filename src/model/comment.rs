use chrono::{DateTime, Utc};

use crate::dto::comment::CommentDto;

/// A user-authored comment attached to exactly one review.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub author: String,
    pub review_id: i32,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            author: entity.author,
            review_id: entity.review_id,
            body: entity.body,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            author: self.author,
            review_id: self.review_id,
            body: self.body,
            votes: self.votes,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a comment on a review.
///
/// `votes` is deliberately absent: new comments always start at zero
/// regardless of what the client sends.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub review_id: i32,
    pub username: String,
    pub body: String,
}
