//! HTTP request handlers.
//!
//! Handlers extract path, query and body values, pass them to a service without
//! validating them, and wrap the result in the JSON envelope the endpoint returns.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
