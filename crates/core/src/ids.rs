//! External identifier validation.
//!
//! Identifiers arrive as strings (path segments, query parameters). A
//! well-formed identifier is a positive decimal integer that fits a
//! `BIGSERIAL` key. Listing filters drop malformed ids silently via
//! [`parse_id`]; required path parameters reject them via [`require_id`].

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a raw identifier. Returns `None` for anything that is not a
/// positive `i64` written in plain decimal digits.
///
/// # Examples
///
/// ```
/// use vidhub_core::ids::parse_id;
/// assert_eq!(parse_id("42"), Some(42));
/// assert_eq!(parse_id(" 7 "), Some(7));
/// assert_eq!(parse_id("not-a-valid-id"), None);
/// assert_eq!(parse_id("0"), None);
/// assert_eq!(parse_id("+5"), None);
/// ```
pub fn parse_id(raw: &str) -> Option<DbId> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<DbId>().ok().filter(|id| *id > 0)
}

/// Parse an identifier that the request cannot proceed without.
///
/// `label` names the entity in the error message, e.g. `"video"` yields
/// `"Invalid video id"`.
pub fn require_id(raw: &str, label: &str) -> Result<DbId, CoreError> {
    parse_id(raw).ok_or_else(|| CoreError::Validation(format!("Invalid {label} id")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_positive_decimal() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn rejects_malformed() {
        for raw in ["", "   ", "-3", "0", "1.5", "abc", "12abc"] {
            assert_eq!(parse_id(raw), None, "{raw:?} should be rejected");
        }
        assert_eq!(parse_id("9223372036854775808"), None);
    }

    #[test]
    fn require_id_reports_entity_label() {
        let err = require_id("nope", "video").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Invalid video id");
    }

    #[test]
    fn require_id_passes_valid_value() {
        assert_eq!(require_id("15", "comment").unwrap(), 15);
    }
}
