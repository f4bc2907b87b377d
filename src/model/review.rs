//! Review domain models.
//!
//! `Review` carries every stored field and backs the single-review endpoint.
//! `ReviewSummary` backs the listing: it drops the body text and adds the
//! read-time `comment_count` aggregate, which is never persisted.

use chrono::{DateTime, Utc};

use crate::dto::review::{ReviewDto, ReviewSummaryDto};

/// A catalogued board-game review with all stored fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
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

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            review_id: entity.review_id,
            title: entity.title,
            category: entity.category,
            designer: entity.designer,
            owner: entity.owner,
            review_body: entity.review_body,
            review_img_url: entity.review_img_url,
            created_at: entity.created_at,
            votes: entity.votes,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            review_id: self.review_id,
            title: self.title,
            category: self.category,
            designer: self.designer,
            owner: self.owner,
            review_body: self.review_body,
            review_img_url: self.review_img_url,
            created_at: self.created_at,
            votes: self.votes,
        }
    }
}

/// A review listing entry with the derived comment count.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
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

impl ReviewSummary {
    pub fn into_dto(self) -> ReviewSummaryDto {
        ReviewSummaryDto {
            review_id: self.review_id,
            title: self.title,
            category: self.category,
            designer: self.designer,
            owner: self.owner,
            review_img_url: self.review_img_url,
            created_at: self.created_at,
            votes: self.votes,
            comment_count: self.comment_count,
        }
    }
}
