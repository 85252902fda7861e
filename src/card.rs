//! The transient card number type.
//!
//! A [`CardNumber`] only exists for the duration of one check. Its digits are
//! wiped when it is dropped and never appear in `Debug` or `Display` output.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bin::extract_issuer_id;
use crate::error::ValidationError;
use crate::format::{check_format, strip_formatting};
use crate::mask::mask_string;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// A cleaned, well-formed card number (13-19 ASCII digits).
///
/// # Security
///
/// - Memory is zeroed on drop using the `zeroize` crate
/// - Debug and Display are masked to prevent accidental logging
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CardNumber {
    digits: String,
}

impl CardNumber {
    /// Cleans raw user input and checks its format.
    ///
    /// The Luhn checksum is not checked here.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_bankid::CardNumber;
    ///
    /// let card = CardNumber::parse("4111-1111-1111-1111").unwrap();
    /// assert_eq!(card.len(), 16);
    /// assert_eq!(card.to_string(), "****-****-****-1111");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let digits = strip_formatting(raw);
        if let Err(e) = check_format(&digits) {
            let mut digits = digits;
            digits.zeroize();
            return Err(e);
        }
        Ok(Self { digits })
    }

    /// Returns the full digit string.
    ///
    /// Avoid passing this to loggers; use [`CardNumber::masked`] instead.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: a parsed card number has at least 13 digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the issuer identification number (first 6 digits).
    #[inline]
    pub fn issuer_id(&self) -> Option<i64> {
        extract_issuer_id(&self.digits)
    }

    /// Returns the number with all but the last four digits masked.
    pub fn masked(&self) -> String {
        mask_string(&self.digits)
    }

    /// Returns the last four digits.
    pub fn last_four(&self) -> &str {
        let len = self.digits.len();
        &self.digits[len.saturating_sub(4)..]
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("masked", &self.masked())
            .field("length", &self.len())
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
