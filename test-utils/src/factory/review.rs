//! Review factory for creating test review entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// The category slug and owner username are required constructor arguments
/// because both are enforced foreign keys; create them first with the
/// category and user factories.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, &category.slug, &user.username)
///     .title("Agricola")
///     .votes(1)
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    designer: String,
    owner: String,
    review_body: String,
    review_img_url: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Review {id}"` where id is auto-incremented
    /// - designer: `"Designer {id}"`
    /// - review_body: a short placeholder body
    /// - review_img_url: a placeholder image URL
    /// - created_at: now
    /// - votes: 0
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category` - Slug of an existing category
    /// - `owner` - Username of an existing user
    pub fn new(
        db: &'a DatabaseConnection,
        category: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Review {}", id),
            category: category.into(),
            designer: format!("Designer {}", id),
            owner: owner.into(),
            review_body: format!("A review body for review {}", id),
            review_img_url: format!("https://images.example.com/review-{}.png", id),
            created_at: Utc::now(),
            votes: 0,
        }
    }

    /// Sets the review title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the game designer.
    pub fn designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = designer.into();
        self
    }

    /// Sets the review body text.
    pub fn review_body(mut self, review_body: impl Into<String>) -> Self {
        self.review_body = review_body.into();
        self
    }

    /// Sets the creation timestamp, which drives listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the vote count.
    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted review entity with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(self.category),
            designer: ActiveValue::Set(self.designer),
            owner: ActiveValue::Set(self.owner),
            review_body: ActiveValue::Set(self.review_body),
            review_img_url: ActiveValue::Set(self.review_img_url),
            created_at: ActiveValue::Set(self.created_at),
            votes: ActiveValue::Set(self.votes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for an existing category and owner.
pub async fn create_review(
    db: &DatabaseConnection,
    category: &str,
    owner: &str,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, category, owner).build().await
}
