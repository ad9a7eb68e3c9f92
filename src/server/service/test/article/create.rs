use super::*;

fn params(author: &str, topic: &str) -> CreateArticleParams {
    CreateArticleParams {
        author: author.to_string(),
        title: "Living in the shadow of a great man".to_string(),
        body: "I find this existence challenging".to_string(),
        topic: topic.to_string(),
        article_img_url: Some("https://images.example.com/shadow.jpg".to_string()),
    }
}

async fn article_count(db: &sea_orm::DatabaseConnection) -> Result<u64, AppError> {
    Ok(entity::prelude::Article::find().count(db).await?)
}

/// Tests creating an article.
///
/// Expected: Ok(Article) with votes and comment count at zero
#[tokio::test]
async fn creates_article() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;

    let service = ArticleService::new(db);
    let article = service.create(params(&user.username, &topic.slug)).await?;

    assert!(article.article_id > 0);
    assert_eq!(article.author, user.username);
    assert_eq!(article.topic, topic.slug);
    assert_eq!(article.article_img_url, "https://images.example.com/shadow.jpg");
    assert_eq!(article.votes, 0);
    assert_eq!(article.comment_count, 0);
    assert_eq!(article_count(db).await?, 1);

    Ok(())
}

/// Tests that a missing or empty image URL falls back to the placeholder.
///
/// Expected: Ok(Article) with the default image URL
#[tokio::test]
async fn defaults_missing_image_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;

    let service = ArticleService::new(db);
    for article_img_url in [None, Some(String::new())] {
        let article = service
            .create(CreateArticleParams {
                article_img_url,
                ..params(&user.username, &topic.slug)
            })
            .await?;

        assert_eq!(article.article_img_url, DEFAULT_ARTICLE_IMG_URL);
    }

    Ok(())
}

/// Tests that a missing title or body is rejected without writing.
///
/// Expected: Err(BadRequest("Invalid input")) and no rows inserted
#[tokio::test]
async fn rejects_missing_title_or_body() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;

    let service = ArticleService::new(db);
    let no_title = CreateArticleParams {
        title: String::new(),
        ..params(&user.username, &topic.slug)
    };
    let no_body = CreateArticleParams {
        body: String::new(),
        ..params(&user.username, &topic.slug)
    };

    assert_error(
        service.create(no_title).await,
        AppError::bad_request(message::INVALID_INPUT),
    );
    assert_error(
        service.create(no_body).await,
        AppError::bad_request(message::INVALID_INPUT),
    );
    assert_eq!(article_count(db).await?, 0);

    Ok(())
}

/// Tests that an unknown author is rejected without writing.
///
/// Expected: Err(NotFound("User not found")) and no rows inserted
#[tokio::test]
async fn rejects_unknown_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;

    let service = ArticleService::new(db);

    assert_error(
        service.create(params("nobody", &topic.slug)).await,
        AppError::not_found(message::USER_NOT_FOUND),
    );
    assert_eq!(article_count(db).await?, 0);

    Ok(())
}

/// Tests that an unknown or empty topic is rejected without writing.
///
/// Expected: Err(NotFound("Topic not found")) and no rows inserted
#[tokio::test]
async fn rejects_unknown_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = ArticleService::new(db);

    for topic in ["not-a-topic", ""] {
        assert_error(
            service.create(params(&user.username, topic)).await,
            AppError::not_found(message::TOPIC_NOT_FOUND),
        );
    }
    assert_eq!(article_count(db).await?, 0);

    Ok(())
}
