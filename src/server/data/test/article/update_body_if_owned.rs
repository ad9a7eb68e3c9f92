use super::*;

/// Tests replacing the body of an owned article.
///
/// Expected: Ok(Some(Model)) with the new body persisted
#[tokio::test]
async fn updates_body_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update_body_if_owned(article.article_id, &user.username, "Rewritten".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.body, "Rewritten");
    assert_eq!(updated.title, article.title);
    assert_eq!(updated.votes, article.votes);

    Ok(())
}

/// Tests that a non-owner cannot change the body.
///
/// Expected: Ok(None) with the stored body unchanged
#[tokio::test]
async fn leaves_body_unchanged_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let intruder = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let result = repo
        .update_body_if_owned(article.article_id, &intruder.username, "Hijacked".to_string())
        .await?;

    assert!(result.is_none());

    let stored = entity::prelude::Article::find_by_id(article.article_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.body, article.body);

    Ok(())
}

/// Tests updating a missing article.
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

    let user = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let result = repo
        .update_body_if_owned(999, &user.username, "Nothing".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
