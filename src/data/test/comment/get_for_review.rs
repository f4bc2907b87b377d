use super::*;

/// Tests listing comments for a review that has none.
///
/// The review exists, so this is an empty list rather than a not-found
/// outcome.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_for_review_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let user = factory::create_user(db).await?;
    let review = factory::create_review(db, &category.slug, &user.username).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_for_review(review.review_id).await.unwrap();

    assert!(comments.is_empty());

    Ok(())
}

/// Tests listing comments for a review that does not exist.
///
/// Expected: Err(NotFound) with the review id embedded in the message
#[tokio::test]
async fn returns_not_found_for_absent_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let err = repo.get_for_review(42).await.unwrap_err();

    match err {
        AppError::NotFound(msg) => assert_eq!(msg, "No review found for review 42"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests that comments come back newest first and scoped to the review.
///
/// Expected: Ok with only the review's comments, created_at non-increasing
#[tokio::test]
async fn sorts_newest_first_and_scopes_to_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let user = factory::create_user(db).await?;
    let review = factory::create_review(db, &category.slug, &user.username).await?;
    let other_review = factory::create_review(db, &category.slug, &user.username).await?;

    for (day, hour) in [(10, 8), (12, 9), (11, 14)] {
        CommentFactory::new(db, review.review_id, &user.username)
            .created_at(Utc.with_ymd_and_hms(2021, 3, day, hour, 0, 0).unwrap())
            .build()
            .await?;
    }
    factory::create_comment(db, other_review.review_id, &user.username).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_for_review(review.review_id).await.unwrap();

    assert_eq!(comments.len(), 3);
    assert!(comments.iter().all(|c| c.review_id == review.review_id));
    assert!(comments
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));

    Ok(())
}
