//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments attached to an existing article.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i32,
    author: String,
    body: String,
    votes: i32,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - body: `"Comment {id}"`
    /// - votes: `0`
    pub fn new(db: &'a DatabaseConnection, article_id: i32, author: &str) -> Self {
        let id = next_id();
        Self {
            db,
            article_id,
            author: author.to_string(),
            body: format!("Comment {}", id),
            votes: 0,
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(self.article_id),
            author: ActiveValue::Set(self.author),
            body: ActiveValue::Set(self.body),
            votes: ActiveValue::Set(self.votes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values on the given article.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    author: &str,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id, author).build().await
}

/// Creates `count` comments on the given article.
pub async fn create_comments(
    db: &DatabaseConnection,
    article_id: i32,
    author: &str,
    count: usize,
) -> Result<Vec<entity::comment::Model>, DbErr> {
    let mut comments = Vec::with_capacity(count);
    for _ in 0..count {
        comments.push(create_comment(db, article_id, author).await?);
    }
    Ok(comments)
}
