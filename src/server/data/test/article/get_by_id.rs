use super::*;

/// Tests getting an article with its comment count.
///
/// Expected: Ok(Some(Article)) with every column and the live count
#[tokio::test]
async fn gets_article_with_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    factory::comment::create_comments(db, article.article_id, &user.username, 11).await?;

    let repo = ArticleRepository::new(db);
    let found = repo.get_by_id(article.article_id).await?.unwrap();

    assert_eq!(found.article_id, article.article_id);
    assert_eq!(found.title, article.title);
    assert_eq!(found.body, article.body);
    assert_eq!(found.topic, article.topic);
    assert_eq!(found.author, article.author);
    assert_eq!(found.votes, article.votes);
    assert_eq!(found.article_img_url, article.article_img_url);
    assert_eq!(found.comment_count, 11);

    Ok(())
}

/// Tests that an article without comments reports zero.
///
/// Expected: Ok(Some(Article)) with comment_count 0
#[tokio::test]
async fn counts_zero_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let found = repo.get_by_id(article.article_id).await?.unwrap();

    assert_eq!(found.comment_count, 0);

    Ok(())
}

/// Tests getting an article that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());
    assert!(repo.find_author(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}

/// Tests the lightweight author and existence lookups.
///
/// Expected: Ok with the stored author and true
#[tokio::test]
async fn finds_author_of_existing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);

    assert_eq!(repo.find_author(article.article_id).await?, Some(user.username));
    assert!(repo.exists(article.article_id).await?);

    Ok(())
}
