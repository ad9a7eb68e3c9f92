use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository, user::UserRepository},
    error::{message, AppError},
    model::comment::Comment,
    util::parse::parse_article_id,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments of an article, newest first.
    ///
    /// An existing article without comments yields an empty list, not an error.
    pub async fn get_by_article_id(&self, article_id: &str) -> Result<Vec<Comment>, AppError> {
        let article_id = parse_article_id(article_id)?;

        if !ArticleRepository::new(self.db).exists(article_id).await? {
            return Err(AppError::not_found(message::ARTICLE_ID_NOT_FOUND));
        }

        Ok(CommentRepository::new(self.db)
            .get_by_article_id(article_id)
            .await?)
    }

    /// Gets the comments written by a user, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments, empty when the user has written none
    /// - `Err(AppError::NotFound)` - "User not found"
    pub async fn get_by_author(&self, username: &str) -> Result<Vec<Comment>, AppError> {
        if UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(message::USER_NOT_FOUND));
        }

        Ok(CommentRepository::new(self.db).get_by_author(username).await?)
    }
}
