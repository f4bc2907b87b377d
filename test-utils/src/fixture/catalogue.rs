//! Canonical seeded catalogue used by route-level tests.
//!
//! Seeds a small but complete dataset with a known shape:
//!
//! - two categories, three users
//! - three reviews, newest first by `created_at`: review 3, review 1, review 2
//! - review 1 has no comments, reviews 2 and 3 have three comments each
//!
//! Tests assert against this shape (comment counts of 0/3/3, descending
//! timestamps), so changes here must be mirrored in the route tests.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    category::CategoryFactory, comment::CommentFactory, review::ReviewFactory, user::UserFactory,
};

/// Entities created by [`seed_catalogue`], in insertion order.
pub struct SeededCatalogue {
    pub categories: Vec<entity::category::Model>,
    pub users: Vec<entity::user::Model>,
    pub reviews: Vec<entity::review::Model>,
    pub comments: Vec<entity::comment::Model>,
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Seeds the canonical catalogue dataset into the given database.
///
/// # Returns
/// - `Ok(SeededCatalogue)` - All inserted entities
/// - `Err(DbErr)` - Database error during seeding
pub async fn seed_catalogue(db: &DatabaseConnection) -> Result<SeededCatalogue, DbErr> {
    let euro_game = CategoryFactory::new(db)
        .slug("euro-game")
        .description("Abstract games that involve little luck")
        .build()
        .await?;
    let social_deduction = CategoryFactory::new(db)
        .slug("social-deduction")
        .description("Players attempt to uncover each other's hidden role")
        .build()
        .await?;

    let mallionaire = UserFactory::new(db)
        .username("mallionaire")
        .name("haz")
        .avatar_url("https://avatars.example.com/mallionaire.png")
        .build()
        .await?;
    let philippaclaire9 = UserFactory::new(db)
        .username("philippaclaire9")
        .name("philippa")
        .avatar_url("https://avatars.example.com/philippaclaire9.png")
        .build()
        .await?;
    let bainesface = UserFactory::new(db)
        .username("bainesface")
        .name("sarah")
        .avatar_url("https://avatars.example.com/bainesface.png")
        .build()
        .await?;

    // Review 1 deliberately has no comments; reviews 2 and 3 get three each.
    let review_1 = ReviewFactory::new(db, "euro-game", "mallionaire")
        .title("Agricola")
        .designer("Uwe Rosenberg")
        .review_body("Farmyard fun!")
        .created_at(at(2021, 1, 18, 10))
        .votes(1)
        .build()
        .await?;
    let review_2 = ReviewFactory::new(db, "social-deduction", "philippaclaire9")
        .title("Jenga")
        .designer("Leslie Scott")
        .review_body("Fiddly fun for all the family")
        .created_at(at(2021, 1, 10, 10))
        .votes(5)
        .build()
        .await?;
    let review_3 = ReviewFactory::new(db, "social-deduction", "bainesface")
        .title("Ultimate Werewolf")
        .designer("Akihisa Okui")
        .review_body("We couldn't find the werewolf!")
        .created_at(at(2021, 1, 25, 11))
        .votes(5)
        .build()
        .await?;

    let mut comments = Vec::new();
    for (author, body, votes, ts) in [
        ("bainesface", "I loved this game too!", 16, at(2017, 11, 22, 12)),
        ("mallionaire", "EPIC board game!", 16, at(2019, 4, 6, 13)),
        ("philippaclaire9", "Now this is a story...", 10, at(2021, 3, 27, 19)),
    ] {
        comments.push(
            CommentFactory::new(db, review_2.review_id, author)
                .body(body)
                .votes(votes)
                .created_at(ts)
                .build()
                .await?,
        );
    }
    for (author, body, votes, ts) in [
        ("bainesface", "My dog loved this game too!", 13, at(2021, 1, 18, 10)),
        ("mallionaire", "Quis est sed?", 3, at(2021, 3, 27, 14)),
        ("philippaclaire9", "Valid points all round", 1, at(2021, 3, 27, 10)),
    ] {
        comments.push(
            CommentFactory::new(db, review_3.review_id, author)
                .body(body)
                .votes(votes)
                .created_at(ts)
                .build()
                .await?,
        );
    }

    Ok(SeededCatalogue {
        categories: vec![euro_game, social_deduction],
        users: vec![mallionaire, philippaclaire9, bainesface],
        reviews: vec![review_1, review_2, review_3],
        comments,
    })
}
