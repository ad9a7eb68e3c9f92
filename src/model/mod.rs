//! Wire-format DTOs shared by the controllers and API documentation.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
