//! Validation for user-supplied text fields in request bodies.

use crate::error::CoreError;

/// Maximum length of a video or playlist title / name.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of comment and tweet content.
pub const MAX_CONTENT_LEN: usize = 5_000;

/// Require a present, non-blank field and return it trimmed.
///
/// `message` is returned verbatim on failure so each endpoint can keep its
/// own wording ("Comment should not be empty", "Content is required").
pub fn require_text<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

/// Validate an optional patch field: absent is fine, present must be non-blank.
pub fn optional_text<'a>(
    value: Option<&'a str>,
    field: &str,
) -> Result<Option<&'a str>, CoreError> {
    match value.map(str::trim) {
        None => Ok(None),
        Some("") => Err(CoreError::Validation(format!("{field} must not be empty"))),
        Some(v) => Ok(Some(v)),
    }
}

/// Reject values longer than `max` characters.
pub fn check_max_len(value: &str, max: usize, field: &str) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
