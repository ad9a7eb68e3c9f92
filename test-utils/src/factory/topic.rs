//! Topic factory for creating test topic entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test topics with customizable fields.
pub struct TopicFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    description: String,
}

impl<'a> TopicFactory<'a> {
    /// Creates a new TopicFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"topic_{id}"`
    /// - description: `"Description of topic {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("topic_{}", id),
            description: format!("Description of topic {}", id),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the topic entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::topic::Model)` - Created topic entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::topic::Model, DbErr> {
        entity::topic::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a topic with default values.
pub async fn create_topic(db: &DatabaseConnection) -> Result<entity::topic::Model, DbErr> {
    TopicFactory::new(db).build().await
}

/// Creates a topic with a specific slug.
pub async fn create_topic_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::topic::Model, DbErr> {
    TopicFactory::new(db).slug(slug).build().await
}
