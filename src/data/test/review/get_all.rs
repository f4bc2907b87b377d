use super::*;

/// Tests that the listing counts comments per review at read time.
///
/// Seeds two reviews, one with two comments and one with none.
///
/// Expected: Ok with comment_count 2 and 0 respectively
#[tokio::test]
async fn counts_comments_per_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let user = factory::create_user(db).await?;
    let commented = factory::create_review(db, &category.slug, &user.username).await?;
    let uncommented = factory::create_review(db, &category.slug, &user.username).await?;

    factory::create_comment(db, commented.review_id, &user.username).await?;
    factory::create_comment(db, commented.review_id, &user.username).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_all().await.unwrap();

    assert_eq!(reviews.len(), 2);

    let with_comments = reviews
        .iter()
        .find(|r| r.review_id == commented.review_id)
        .expect("commented review missing");
    assert_eq!(with_comments.comment_count, 2);

    let without_comments = reviews
        .iter()
        .find(|r| r.review_id == uncommented.review_id)
        .expect("uncommented review missing");
    assert_eq!(without_comments.comment_count, 0);

    Ok(())
}

/// Tests that the listing is sorted by creation date descending.
///
/// Expected: Ok with non-increasing created_at across the sequence
#[tokio::test]
async fn sorts_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let user = factory::create_user(db).await?;

    for (year, month) in [(2021, 1), (2020, 6), (2021, 3)] {
        ReviewFactory::new(db, &category.slug, &user.username)
            .created_at(Utc.with_ymd_and_hms(year, month, 1, 12, 0, 0).unwrap())
            .build()
            .await?;
    }

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_all().await.unwrap();

    assert_eq!(reviews.len(), 3);
    assert!(reviews
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));

    Ok(())
}

/// Tests that listing entries carry the review fields, not the body text.
///
/// Expected: Ok with title, category, owner, designer, and votes populated
#[tokio::test]
async fn returns_review_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let user = factory::create_user(db).await?;
    ReviewFactory::new(db, &category.slug, &user.username)
        .title("Agricola")
        .designer("Uwe Rosenberg")
        .votes(5)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_all().await.unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].title, "Agricola");
    assert_eq!(reviews[0].designer, "Uwe Rosenberg");
    assert_eq!(reviews[0].category, category.slug);
    assert_eq!(reviews[0].owner, user.username);
    assert_eq!(reviews[0].votes, 5);

    Ok(())
}
