use super::*;

/// Tests listing users from an empty catalogue.
///
/// Expected: Ok with an empty list, not an error
#[tokio::test]
async fn returns_empty_list_for_empty_catalogue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await.unwrap();

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing all seeded users with their full fields.
///
/// Expected: Ok with every user, including name and avatar URL
#[tokio::test]
async fn returns_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("bainesface")
        .name("sarah")
        .avatar_url("https://avatars.example.com/bainesface.png")
        .build()
        .await?;
    UserFactory::new(db).username("mallionaire").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await.unwrap();

    assert_eq!(users.len(), 2);

    let sarah = users
        .iter()
        .find(|u| u.username == "bainesface")
        .expect("bainesface missing");
    assert_eq!(sarah.name, "sarah");
    assert_eq!(
        sarah.avatar_url,
        "https://avatars.example.com/bainesface.png"
    );

    Ok(())
}
