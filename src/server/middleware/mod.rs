//! Request extractors shared by controllers.

pub mod acting_user;
