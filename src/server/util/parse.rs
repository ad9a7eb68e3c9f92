use crate::server::error::{message, AppError};

/// Treats an empty query/body value the same as an absent one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses an article identifier supplied as a path segment.
///
/// # Arguments
/// - `value` - Raw identifier as received by the HTTP layer
///
/// # Returns
/// - `Ok(i32)` - Positive article id
/// - `Err(AppError::BadRequest)` - Value is not a positive integer
pub fn parse_article_id(value: &str) -> Result<i32, AppError> {
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(message::INVALID_INPUT)),
    }
}

/// Parses a page number or page size.
///
/// Values are bounded to `u32` so the derived offset always fits the store's signed
/// 64-bit integer type.
///
/// # Returns
/// - `Ok(u64)` - Positive integer
/// - `Err(AppError::BadRequest)` - Zero, negative, fractional, out of range or non-numeric
pub fn parse_positive_integer(value: &str) -> Result<u64, AppError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n as u64),
        _ => Err(AppError::bad_request(message::INVALID_INPUT)),
    }
}

/// Parses a signed vote delta.
///
/// # Returns
/// - `Ok(i32)` - The delta, possibly negative
/// - `Err(AppError::BadRequest)` - "Invalid input for increment votes"
pub fn parse_vote_increment(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::bad_request(message::INVALID_VOTE_INCREMENT))
}
