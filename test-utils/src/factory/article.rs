//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// The topic and author must already exist; use
/// `helpers::create_article_with_dependencies` when the test does not care about them.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    topic: String,
    author: String,
    title: String,
    body: String,
    votes: i32,
    article_img_url: String,
    created_at: Option<DateTime<Utc>>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - body: `"Body of article {id}"`
    /// - votes: `0`
    /// - article_img_url: `"https://images.example.com/{id}.jpg"`
    /// - created_at: left to the database default
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `topic` - Slug of an existing topic
    /// - `author` - Username of an existing user
    pub fn new(db: &'a DatabaseConnection, topic: &str, author: &str) -> Self {
        let id = next_id();
        Self {
            db,
            topic: topic.to_string(),
            author: author.to_string(),
            title: format!("Article {}", id),
            body: format!("Body of article {}", id),
            votes: 0,
            article_img_url: format!("https://images.example.com/{}.jpg", id),
            created_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn article_img_url(mut self, article_img_url: impl Into<String>) -> Self {
        self.article_img_url = article_img_url.into();
        self
    }

    /// Sets an explicit creation timestamp instead of the database default.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            topic: ActiveValue::Set(self.topic),
            author: ActiveValue::Set(self.author),
            body: ActiveValue::Set(self.body),
            votes: ActiveValue::Set(self.votes),
            article_img_url: ActiveValue::Set(self.article_img_url),
            created_at: match self.created_at {
                Some(created_at) => ActiveValue::Set(created_at),
                None => ActiveValue::NotSet,
            },
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values for the given topic and author.
pub async fn create_article(
    db: &DatabaseConnection,
    topic: &str,
    author: &str,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, topic, author).build().await
}
