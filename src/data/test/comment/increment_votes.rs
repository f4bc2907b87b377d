use super::*;

/// Tests incrementing a comment's votes.
///
/// Expected: Ok with votes raised by the increment, other fields untouched
#[tokio::test]
async fn increments_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let seeded = CommentFactory::new(db, review.review_id, &user.username)
        .votes(16)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let updated = repo.increment_votes(seeded.comment_id, 4).await.unwrap();

    assert_eq!(updated.comment_id, seeded.comment_id);
    assert_eq!(updated.votes, 20);
    assert_eq!(updated.body, seeded.body);

    Ok(())
}

/// Tests that a negative increment can push votes below zero.
///
/// Expected: Ok with a negative vote count
#[tokio::test]
async fn allows_negative_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let seeded = factory::create_comment(db, review.review_id, &user.username).await?;

    let repo = CommentRepository::new(db);
    let updated = repo.increment_votes(seeded.comment_id, -3).await.unwrap();

    assert_eq!(updated.votes, -3);

    Ok(())
}

/// Tests that the increment is keyed by comment id, not review id.
///
/// Two comments on the same review; only the targeted one changes.
///
/// Expected: Ok, sibling comment votes unchanged
#[tokio::test]
async fn leaves_sibling_comments_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let target = factory::create_comment(db, review.review_id, &user.username).await?;
    let sibling = factory::create_comment(db, review.review_id, &user.username).await?;

    let repo = CommentRepository::new(db);
    repo.increment_votes(target.comment_id, 10).await.unwrap();

    let comments = repo.get_for_review(review.review_id).await.unwrap();
    let sibling_after = comments
        .iter()
        .find(|c| c.comment_id == sibling.comment_id)
        .expect("sibling missing");

    assert_eq!(sibling_after.votes, sibling.votes);

    Ok(())
}

/// Tests incrementing votes on a comment that does not exist.
///
/// Expected: Err(NotFound) with the comment id embedded in the message
#[tokio::test]
async fn returns_not_found_for_absent_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let err = repo.increment_votes(7, 1).await.unwrap_err();

    match err {
        AppError::NotFound(msg) => assert_eq!(msg, "No comment found for comment 7"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
