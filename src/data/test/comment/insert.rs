use super::*;

/// Tests creating a comment on an existing review.
///
/// Expected: Ok with a generated id, the given author and body, and votes
/// initialized to 0
#[tokio::test]
async fn creates_comment_with_zero_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .insert(CreateCommentParams {
            review_id: review.review_id,
            username: user.username.clone(),
            body: "I loved this game too!".to_string(),
        })
        .await
        .unwrap();

    assert!(comment.comment_id > 0);
    assert_eq!(comment.author, user.username);
    assert_eq!(comment.review_id, review.review_id);
    assert_eq!(comment.body, "I loved this game too!");
    assert_eq!(comment.votes, 0);

    Ok(())
}

/// Tests creating a comment authored by an unknown username.
///
/// Expected: Err(NotFound) with the generic message, nothing inserted
#[tokio::test]
async fn rejects_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let err = repo
        .insert(CreateCommentParams {
            review_id: review.review_id,
            username: "nobody".to_string(),
            body: "ghost comment".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        AppError::NotFound(msg) => assert_eq!(msg, "Not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    let comments = repo.get_for_review(review.review_id).await.unwrap();
    assert!(comments.is_empty());

    Ok(())
}

/// Tests creating a comment on a well-formed but absent review id.
///
/// Expected: Err(NotFound) with the generic message
#[tokio::test]
async fn rejects_unknown_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let err = repo
        .insert(CreateCommentParams {
            review_id: 1000,
            username: user.username,
            body: "into the void".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        AppError::NotFound(msg) => assert_eq!(msg, "Not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
