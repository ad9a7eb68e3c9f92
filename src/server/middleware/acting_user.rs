//! Identifies the user a request acts on behalf of.
//!
//! Sign-in is handled in front of this service, which forwards the authenticated
//! username in the `x-username` header. Handlers that mutate owned resources take
//! [`ActingUser`] as an argument and never see a request without one.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::{message, AppError};

pub const ACTING_USER_HEADER: &str = "x-username";

/// Username of the caller, read from the `x-username` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser(pub String);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ACTING_USER_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|username| !username.is_empty())
            .map(|username| ActingUser(username.to_string()))
            .ok_or_else(|| AppError::unauthorized(message::AUTHENTICATION_REQUIRED))
    }
}
