//! Comment data repository.
//!
//! Comments are the only entity written through the API: one insert path and
//! one vote-increment path. Referenced users and reviews are checked
//! explicitly before writing rather than relying on the shape of
//! driver-specific foreign-key violation errors.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    ExprTrait, QueryFilter, QueryOrder,
};

use crate::{
    data::review::ReviewRepository,
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
};

/// Repository providing database operations for comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all comments on a review, newest first.
    ///
    /// The review's existence is checked before the comments are queried, so
    /// a real review with no comments yields an empty list rather than a
    /// not-found outcome.
    ///
    /// # Arguments
    /// - `review_id` - Id of the review whose comments to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments sorted by created_at descending
    /// - `Err(AppError::NotFound)` - No review with that id exists
    /// - `Err(AppError)` - Database error during query
    pub async fn get_for_review(&self, review_id: i32) -> Result<Vec<Comment>, AppError> {
        if !ReviewRepository::new(self.db).exists(review_id).await? {
            return Err(AppError::NotFound(format!(
                "No review found for review {}",
                review_id
            )));
        }

        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ReviewId.eq(review_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Inserts a new comment on a review.
    ///
    /// Votes always start at 0 and `created_at` is set here; the generated
    /// comment id comes back from the insert. Unknown author usernames and
    /// unknown review ids are both reported as a generic not-found outcome.
    ///
    /// # Arguments
    /// - `params` - Review id, author username, and comment body
    ///
    /// # Returns
    /// - `Ok(Comment)` - The newly created comment
    /// - `Err(AppError::NotFound)` - The author or the review does not exist
    /// - `Err(AppError)` - Database error during insert
    pub async fn insert(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let author = entity::prelude::User::find_by_id(params.username.clone())
            .one(self.db)
            .await?;

        if author.is_none() {
            return Err(AppError::NotFound("Not found".to_string()));
        }

        if !ReviewRepository::new(self.db).exists(params.review_id).await? {
            return Err(AppError::NotFound("Not found".to_string()));
        }

        let entity = entity::comment::ActiveModel {
            author: ActiveValue::Set(params.username),
            review_id: ActiveValue::Set(params.review_id),
            body: ActiveValue::Set(params.body),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Increments a single comment's votes by the given amount.
    ///
    /// The increment is a single atomic column expression keyed by comment
    /// id; `inc_votes` may be negative and votes may go below zero.
    ///
    /// # Arguments
    /// - `comment_id` - Id of the comment to update
    /// - `inc_votes` - Signed amount to add to the comment's votes
    ///
    /// # Returns
    /// - `Ok(Comment)` - The updated comment
    /// - `Err(AppError::NotFound)` - No comment with that id exists
    /// - `Err(AppError)` - Database error during update
    pub async fn increment_votes(
        &self,
        comment_id: i32,
        inc_votes: i32,
    ) -> Result<Comment, AppError> {
        let existing = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?;

        if existing.is_none() {
            return Err(AppError::NotFound(format!(
                "No comment found for comment {}",
                comment_id
            )));
        }

        entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::Votes,
                Expr::col(entity::comment::Column::Votes).add(inc_votes),
            )
            .filter(entity::comment::Column::CommentId.eq(comment_id))
            .exec(self.db)
            .await?;

        let updated = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?;

        updated.map(Comment::from_entity).ok_or_else(|| {
            AppError::NotFound(format!("No comment found for comment {}", comment_id))
        })
    }
}
