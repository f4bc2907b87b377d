//! Review data repository.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder, QuerySelect,
};

use crate::{
    error::AppError,
    model::review::{Review, ReviewSummary},
};

/// Row shape for the review listing aggregate query.
#[derive(FromQueryResult)]
struct ReviewSummaryRow {
    review_id: i32,
    title: String,
    category: String,
    designer: String,
    owner: String,
    review_img_url: String,
    created_at: sea_orm::prelude::DateTimeUtc,
    votes: i32,
    comment_count: i64,
}

/// Repository providing database operations for reviews.
///
/// Reviews are read-only through this layer; rows are seeded externally.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all reviews with their derived comment counts, newest first.
    ///
    /// Implemented as a left join + count aggregate over comments grouped by
    /// review, so reviews with zero comments still appear with a count of 0.
    /// `comment_count` is computed here at read time and never stored.
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewSummary>)` - All reviews sorted by created_at descending
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<ReviewSummary>, AppError> {
        let rows = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::ReviewId)
            .column(entity::review::Column::Title)
            .column(entity::review::Column::Category)
            .column(entity::review::Column::Designer)
            .column(entity::review::Column::Owner)
            .column(entity::review::Column::ReviewImgUrl)
            .column(entity::review::Column::CreatedAt)
            .column(entity::review::Column::Votes)
            .column_as(entity::comment::Column::CommentId.count(), "comment_count")
            .left_join(entity::prelude::Comment)
            .group_by(entity::review::Column::ReviewId)
            .group_by(entity::review::Column::Title)
            .group_by(entity::review::Column::Category)
            .group_by(entity::review::Column::Designer)
            .group_by(entity::review::Column::Owner)
            .group_by(entity::review::Column::ReviewImgUrl)
            .group_by(entity::review::Column::CreatedAt)
            .group_by(entity::review::Column::Votes)
            .order_by_desc(entity::review::Column::CreatedAt)
            .into_model::<ReviewSummaryRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ReviewSummary {
                review_id: row.review_id,
                title: row.title,
                category: row.category,
                designer: row.designer,
                owner: row.owner,
                review_img_url: row.review_img_url,
                created_at: row.created_at,
                votes: row.votes,
                comment_count: row.comment_count,
            })
            .collect())
    }

    /// Finds a single review by id.
    ///
    /// # Arguments
    /// - `review_id` - Id of the review to fetch
    ///
    /// # Returns
    /// - `Ok(Review)` - The review with all stored fields
    /// - `Err(AppError::NotFound)` - No review with that id exists
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_id(&self, review_id: i32) -> Result<Review, AppError> {
        let entity = entity::prelude::Review::find_by_id(review_id)
            .one(self.db)
            .await?;

        entity
            .map(Review::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("No review found for review {}", review_id)))
    }

    /// Checks whether a review with the given id exists.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the review exists
    /// - `Err(AppError)` - Database error during query
    pub async fn exists(&self, review_id: i32) -> Result<bool, AppError> {
        let entity = entity::prelude::Review::find_by_id(review_id)
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }
}
