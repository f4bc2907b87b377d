use crate::error::AppError;

/// Parses an id path segment into an i32 key.
///
/// Id segments are validated before any query is issued, so malformed ids
/// never reach the storage layer.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The segment is not integer-shaped
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Bad request".to_string()))
}
