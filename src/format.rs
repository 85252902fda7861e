//! Card number input cleaning and format checks.
//!
//! # Example
//!
//! ```
//! use cc_bankid::format::{is_valid_format, strip_formatting};
//!
//! let cleaned = strip_formatting(" 4111-1111 1111-1111 ");
//! assert_eq!(cleaned, "4111111111111111");
//! assert!(is_valid_format(&cleaned));
//! ```

use crate::card::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::error::ValidationError;

/// Removes surrounding whitespace and every space or hyphen.
///
/// Only those two separators are dropped; any other character is kept so the
/// format check can reject it.
///
/// # Example
///
/// ```
/// use cc_bankid::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111.1111"), "4111.1111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|&c| c != ' ' && c != '-')
        .collect()
}

/// Returns true iff `s` is 13 to 19 characters long and all of them are `0`-`9`.
#[inline]
pub fn is_valid_format(s: &str) -> bool {
    (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Same check as [`is_valid_format`], reporting the first problem found.
///
/// Characters are checked before length, so `"41x"` reports the `x`.
pub fn check_format(s: &str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::Empty);
    }

    if let Some((position, character)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidCharacter {
            position,
            character,
        });
    }

    let length = s.len();
    if length < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            length,
            minimum: MIN_CARD_DIGITS,
        });
    }
    if length > MAX_CARD_DIGITS {
        return Err(ValidationError::TooLong {
            length,
            maximum: MAX_CARD_DIGITS,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
        assert_eq!(strip_formatting("  4111-1111 1111-1111\n"), "4111111111111111");
        assert_eq!(strip_formatting("4111x1111"), "4111x1111");
        assert_eq!(strip_formatting("   "), "");
    }

    #[test]
    fn test_length_bounds() {
        assert!(!is_valid_format("411111111111"));
        assert!(is_valid_format("4111111111111"));
        assert!(is_valid_format("4111111111111111"));
        assert!(is_valid_format("4111111111111111111"));
        assert!(!is_valid_format("41111111111111111111"));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(!is_valid_format("4111111111111a11"));
        assert!(!is_valid_format("4111 1111 1111 1111"));
        assert!(!is_valid_format("+411111111111111"));
        assert!(!is_valid_format(""));
    }

    #[test]
    fn test_check_format_errors() {
        assert_eq!(check_format(""), Err(ValidationError::Empty));
        assert_eq!(
            check_format("41x"),
            Err(ValidationError::InvalidCharacter {
                position: 2,
                character: 'x'
            })
        );
        assert_eq!(
            check_format("411111111111"),
            Err(ValidationError::TooShort {
                length: 12,
                minimum: 13
            })
        );
        assert_eq!(
            check_format("41111111111111111111"),
            Err(ValidationError::TooLong {
                length: 20,
                maximum: 19
            })
        );
        assert_eq!(check_format("4111111111111111"), Ok(()));
    }

    #[test]
    fn test_multibyte_length_is_not_digit_count() {
        // Full-width digits are not ASCII digits
        assert!(!is_valid_format("４１１１１１１１１１１１１"));
        assert!(check_format("４１１１１１１１１１１１１").is_err());
    }
}
