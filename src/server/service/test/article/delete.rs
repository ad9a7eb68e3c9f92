use super::*;

/// Tests the owner deleting an article with comments.
///
/// Expected: Ok(()) then NotFound("Article not found") on lookup and on repeat
#[tokio::test]
async fn deletes_owned_article() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    factory::comment::create_comments(db, article.article_id, &user.username, 4).await?;

    let service = ArticleService::new(db);
    let id = article.article_id.to_string();

    service.delete(&id, &user.username).await?;

    assert_error(
        service.get_by_id(&id).await,
        AppError::not_found(message::ARTICLE_ID_NOT_FOUND),
    );
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_error(
        service.delete(&id, &user.username).await,
        AppError::not_found(message::ARTICLE_NOT_FOUND),
    );

    Ok(())
}

/// Tests another user trying to delete.
///
/// Expected: Err(Unauthorized) with the article kept
#[tokio::test]
async fn rejects_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let intruder = factory::create_user(db).await?;

    let service = ArticleService::new(db);
    let id = article.article_id.to_string();

    assert_error(
        service.delete(&id, &intruder.username).await,
        AppError::unauthorized(message::ARTICLE_BELONGS_TO_ANOTHER_USER),
    );
    assert_eq!(entity::prelude::Article::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting malformed and missing ids.
///
/// Expected: BadRequest("Invalid input") and NotFound("Article not found")
#[tokio::test]
async fn rejects_invalid_and_missing_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = ArticleService::new(db);

    assert_error(
        service.delete("not-an-id", &user.username).await,
        AppError::bad_request(message::INVALID_INPUT),
    );
    assert_error(
        service.delete("9999", &user.username).await,
        AppError::not_found(message::ARTICLE_NOT_FOUND),
    );

    Ok(())
}
