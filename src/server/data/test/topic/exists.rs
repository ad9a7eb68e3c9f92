use super::*;

/// Tests checking for an existing topic.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::topic::create_topic_with_slug(db, "mitch").await?;

    let repo = TopicRepository::new(db);

    assert!(repo.exists("mitch").await?);

    Ok(())
}

/// Tests checking for a topic that does not exist.
///
/// Slugs are matched exactly, so a differently cased slug is a miss.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::topic::create_topic_with_slug(db, "mitch").await?;

    let repo = TopicRepository::new(db);

    assert!(!repo.exists("not-a-topic").await?);
    assert!(!repo.exists("").await?);

    Ok(())
}
