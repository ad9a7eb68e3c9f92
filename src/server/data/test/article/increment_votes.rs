use super::*;

fn applied(update: VoteUpdate) -> Article {
    match update {
        VoteUpdate::Applied(article) => article,
        other => panic!("expected applied vote update, got {:?}", other),
    }
}

/// Tests adding votes to an article.
///
/// Expected: Ok(VoteUpdate::Applied) with votes raised by the delta
#[tokio::test]
async fn increments_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .votes(100)
        .build()
        .await?;
    factory::comment::create_comments(db, article.article_id, &user.username, 2).await?;

    let repo = ArticleRepository::new(db);
    let updated = applied(repo.increment_votes(article.article_id, 100).await?);

    assert_eq!(updated.votes, 200);
    assert_eq!(updated.comment_count, 2);
    assert_eq!(updated.body, article.body);

    Ok(())
}

/// Tests that votes may go below zero.
///
/// Expected: Ok(VoteUpdate::Applied) with negative votes
#[tokio::test]
async fn allows_negative_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let updated = applied(repo.increment_votes(article.article_id, -5).await?);

    assert_eq!(updated.votes, -5);

    Ok(())
}

/// Tests that successive increments accumulate in the stored value.
///
/// Expected: Ok with the sum of all deltas persisted
#[tokio::test]
async fn accumulates_successive_increments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    for delta in [3, -1, 10] {
        repo.increment_votes(article.article_id, delta).await?;
    }

    let stored = entity::prelude::Article::find_by_id(article.article_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.votes, 12);

    Ok(())
}

/// Tests incrementing votes on a missing article.
///
/// Expected: Ok(VoteUpdate::NotFound)
#[tokio::test]
async fn reports_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert_eq!(repo.increment_votes(999, 1).await?, VoteUpdate::NotFound);

    Ok(())
}

/// Tests increments that would push votes past either end of the column's range.
///
/// Expected: Ok(VoteUpdate::OutOfRange) with the stored votes unchanged
#[tokio::test]
async fn rejects_increments_past_the_votes_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let high = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .votes(i32::MAX)
        .build()
        .await?;
    let low = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .votes(i32::MIN)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);

    assert_eq!(
        repo.increment_votes(high.article_id, 1).await?,
        VoteUpdate::OutOfRange
    );
    assert_eq!(
        repo.increment_votes(low.article_id, -1).await?,
        VoteUpdate::OutOfRange
    );

    for (article_id, votes) in [(high.article_id, i32::MAX), (low.article_id, i32::MIN)] {
        let stored = entity::prelude::Article::find_by_id(article_id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(stored.votes, votes);
    }

    let lowered = applied(repo.increment_votes(high.article_id, -1).await?);
    assert_eq!(lowered.votes, i32::MAX - 1);

    Ok(())
}
