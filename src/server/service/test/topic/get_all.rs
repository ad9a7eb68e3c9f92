use super::*;

/// Tests listing all topics.
///
/// Expected: Ok(Vec<Topic>) with slug and description
#[tokio::test]
async fn gets_all_topics() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::topic::TopicFactory::new(db)
        .slug("mitch")
        .description("The man, the Mitch, the legend")
        .build()
        .await?;

    let service = TopicService::new(db);
    let topics = service.get_all().await?;

    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].slug, "mitch");
    assert_eq!(topics[0].description, "The man, the Mitch, the legend");

    Ok(())
}
