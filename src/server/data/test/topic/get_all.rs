use super::*;

/// Tests listing topics ordered by slug.
///
/// Expected: Ok(Vec<Topic>) sorted by slug
#[tokio::test]
async fn gets_all_topics_ordered_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for slug in ["paper", "cats", "mitch"] {
        factory::topic::create_topic_with_slug(db, slug).await?;
    }

    let repo = TopicRepository::new(db);
    let topics = repo.get_all().await?;

    let slugs: Vec<&str> = topics.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["cats", "mitch", "paper"]);

    Ok(())
}

/// Tests listing topics on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TopicRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
