//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Parsing the raw strings handed over by controllers
//! - **Business Rules**: Existence and ownership checks before any write
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
