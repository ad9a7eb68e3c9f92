use super::*;

/// Tests listing the comments of one article.
///
/// Expected: Ok(Vec<Comment>) containing only that article's comments, newest first
#[tokio::test]
async fn gets_comments_for_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (topic, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let other = factory::create_article(db, &topic.slug, &user.username).await?;
    let created =
        factory::comment::create_comments(db, article.article_id, &user.username, 3).await?;
    factory::create_comment(db, other.article_id, &user.username).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_article_id(article.article_id).await?;

    assert_eq!(comments.len(), 3);
    assert!(comments.iter().all(|c| c.article_id == article.article_id));

    // Inserted within the same second, so the id tie-break decides.
    let ids: Vec<i32> = comments.iter().map(|c| c.comment_id).collect();
    let mut expected: Vec<i32> = created.iter().map(|c| c.comment_id).collect();
    expected.reverse();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing comments of an article that has none.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_article_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.get_by_article_id(article.article_id).await?.is_empty());

    Ok(())
}
