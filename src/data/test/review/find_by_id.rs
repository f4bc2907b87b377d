use super::*;

/// Tests fetching an existing review by id.
///
/// Expected: Ok with all stored fields including the body text
#[tokio::test]
async fn finds_existing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let user = factory::create_user(db).await?;
    let seeded = ReviewFactory::new(db, &category.slug, &user.username)
        .title("Jenga")
        .review_body("Fiddly fun for all the family")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let review = repo.find_by_id(seeded.review_id).await.unwrap();

    assert_eq!(review.review_id, seeded.review_id);
    assert_eq!(review.title, "Jenga");
    assert_eq!(review.review_body, "Fiddly fun for all the family");
    assert_eq!(review.owner, user.username);

    Ok(())
}

/// Tests fetching a well-formed but absent review id.
///
/// Expected: Err(NotFound) with the id embedded in the message
#[tokio::test]
async fn returns_not_found_for_absent_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let err = repo.find_by_id(100).await.unwrap_err();

    match err {
        AppError::NotFound(msg) => assert_eq!(msg, "No review found for review 100"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests the existence check used before comment queries.
///
/// Expected: true for a seeded review, false for an absent id
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let user = factory::create_user(db).await?;
    let seeded = factory::create_review(db, &category.slug, &user.username).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.exists(seeded.review_id).await.unwrap());
    assert!(!repo.exists(seeded.review_id + 100).await.unwrap());

    Ok(())
}
