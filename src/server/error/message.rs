//! Client-facing error messages.
//!
//! Messages are fixed literals so the HTTP boundary and tests can match on them exactly.

pub const INVALID_INPUT: &str = "Invalid input";
pub const INVALID_VOTE_INCREMENT: &str = "Invalid input for increment votes";
pub const TOPIC_NOT_FOUND: &str = "Topic not found";
pub const USER_NOT_FOUND: &str = "User not found";
pub const ARTICLE_ID_NOT_FOUND: &str = "Article ID not found";
pub const ARTICLE_NOT_FOUND: &str = "Article not found";
pub const ARTICLE_BELONGS_TO_ANOTHER_USER: &str = "Article belongs to another user";
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
