//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// The review id and author username are required constructor arguments
/// because both are enforced foreign keys.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let comment = CommentFactory::new(&db, review.review_id, &user.username)
///     .body("I loved this game too!")
///     .votes(16)
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    author: String,
    review_id: i32,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - body: `"Comment {id}"` where id is auto-incremented
    /// - votes: 0
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `review_id` - Id of an existing review
    /// - `author` - Username of an existing user
    pub fn new(db: &'a DatabaseConnection, review_id: i32, author: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            author: author.into(),
            review_id,
            body: format!("Comment {}", id),
            votes: 0,
            created_at: Utc::now(),
        }
    }

    /// Sets the comment body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the vote count.
    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Sets the creation timestamp, which drives listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted comment entity with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            author: ActiveValue::Set(self.author),
            review_id: ActiveValue::Set(self.review_id),
            body: ActiveValue::Set(self.body),
            votes: ActiveValue::Set(self.votes),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values for an existing review and author.
pub async fn create_comment(
    db: &DatabaseConnection,
    review_id: i32,
    author: &str,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, review_id, author).build().await
}
