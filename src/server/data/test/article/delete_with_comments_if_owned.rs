use super::*;

/// Tests deleting an owned article together with its comments.
///
/// Expected: Ok(true) with the article and all of its comments removed
#[tokio::test]
async fn deletes_article_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (topic, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let other = factory::create_article(db, &topic.slug, &user.username).await?;
    factory::comment::create_comments(db, article.article_id, &user.username, 3).await?;
    factory::comment::create_comments(db, other.article_id, &user.username, 2).await?;

    let repo = ArticleRepository::new(db);
    let deleted = repo
        .delete_with_comments_if_owned(article.article_id, &user.username)
        .await?;

    assert!(deleted);
    assert!(entity::prelude::Article::find_by_id(article.article_id)
        .one(db)
        .await?
        .is_none());

    let remaining = entity::prelude::Comment::find()
        .filter(entity::comment::Column::ArticleId.eq(article.article_id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let untouched = entity::prelude::Comment::find()
        .filter(entity::comment::Column::ArticleId.eq(other.article_id))
        .count(db)
        .await?;
    assert_eq!(untouched, 2);

    Ok(())
}

/// Tests deleting an owned article that has no comments.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_article_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo
        .delete_with_comments_if_owned(article.article_id, &user.username)
        .await?);
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a non-owner cannot delete, and nothing is removed.
///
/// Expected: Ok(false) with the article and its comments intact
#[tokio::test]
async fn keeps_article_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    factory::comment::create_comments(db, article.article_id, &user.username, 2).await?;
    let intruder = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let deleted = repo
        .delete_with_comments_if_owned(article.article_id, &intruder.username)
        .await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Article::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 2);

    Ok(())
}

/// Tests that deleting twice reports the second attempt as a miss.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_finds_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo
        .delete_with_comments_if_owned(article.article_id, &user.username)
        .await?);
    assert!(!repo
        .delete_with_comments_if_owned(article.article_id, &user.username)
        .await?);

    Ok(())
}
