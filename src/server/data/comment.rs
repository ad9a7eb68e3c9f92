//! Comment data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::comment::Comment;

/// Repository providing read access to article comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments for an article, newest first.
    ///
    /// # Arguments
    /// - `article_id` - Article the comments belong to
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments, empty when the article has none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::CommentId)
            .all(self.db)
            .await?;

        Ok(comments.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets every comment written by `author`, newest first.
    pub async fn get_by_author(&self, author: &str) -> Result<Vec<Comment>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::Author.eq(author))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::CommentId)
            .all(self.db)
            .await?;

        Ok(comments.into_iter().map(Comment::from_entity).collect())
    }
}
