use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single review with all stored fields.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ReviewDto {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// A review listing entry: no body text, but a derived comment count.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ReviewSummaryDto {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReviewsDto {
    pub reviews: Vec<ReviewSummaryDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SingleReviewDto {
    pub review: ReviewDto,
}
