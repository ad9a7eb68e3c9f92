//! SeaORM entity models for the newsboard schema.

pub mod prelude;

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
