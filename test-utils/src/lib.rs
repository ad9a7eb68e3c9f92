//! Newsboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the newsboard
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for seeding topics, users, articles and comments.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_articles() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_article_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (topic, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
