//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let topic = factory::create_topic(&db).await?;
//! let user = factory::create_user(&db).await?;
//! let article = factory::create_article(&db, &topic.slug, &user.username).await?;
//!
//! // Or everything at once
//! let (topic, user, article) = factory::helpers::create_article_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let article = factory::article::ArticleFactory::new(&db, &topic.slug, &user.username)
//!     .title("Living in the shadow of a great man")
//!     .votes(100)
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod topic;
pub mod user;

pub use article::create_article;
pub use comment::create_comment;
pub use topic::create_topic;
pub use user::create_user;
