//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an article together with the topic and author it references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((topic, user, article))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::topic::Model,
        entity::user::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let topic = crate::factory::topic::create_topic(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let article = crate::factory::article::create_article(db, &topic.slug, &user.username).await?;

    Ok((topic, user, article))
}
