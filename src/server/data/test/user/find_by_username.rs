use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some(User)) with every field
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("butter_bridge")
        .name("jonny")
        .avatar_url("https://avatars.example.com/butter_bridge.png")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("butter_bridge").await?.unwrap();

    assert_eq!(user.username, created.username);
    assert_eq!(user.name, "jonny");
    assert_eq!(user.avatar_url, created.avatar_url);

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}
