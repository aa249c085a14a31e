//! Normalization shared by the services.

use library_core::error::AppError;
use library_core::result::AppResult;

/// Trims `value` and rejects it if nothing is left.
pub fn required_text(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Validates a search fragment. Matching is substring and case-insensitive,
/// so an empty fragment would match everything and is refused.
pub fn search_fragment(fragment: &str) -> AppResult<&str> {
    let trimmed = fragment.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Search name must not be empty"));
    }
    Ok(trimmed)
}

/// Ids are positive database serials.
pub fn positive_id(field: &str, id: i64) -> AppResult<i64> {
    if id <= 0 {
        return Err(AppError::validation(format!("{field} must be positive")));
    }
    Ok(id)
}
