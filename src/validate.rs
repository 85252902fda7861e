//! Main validation pipeline for one card number.
//!
//! Input is cleaned of spaces and hyphens, checked for format, checked with
//! Luhn, and finally resolved against the range table. An unmatched BIN is
//! not a failure: the report simply carries no bank.

use crate::bin::{resolve_bank, RangeTable};
use crate::card::CardNumber;
use crate::error::ValidationError;
use crate::format::{is_valid_format, strip_formatting};
use crate::luhn;
use crate::mask::mask_with_bin;
use tracing::trace;

/// Result of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardReport {
    /// Masked card number, safe for display.
    pub masked: String,
    /// Number of digits after cleaning.
    pub length: usize,
    /// The issuer identification number, if the prefix parsed.
    pub issuer_id: Option<i64>,
    /// Name of the issuing bank, or `None` if no range matched.
    pub bank: Option<String>,
}

impl CardReport {
    /// Returns true if a bank was identified.
    pub fn has_bank(&self) -> bool {
        self.bank.is_some()
    }
}

/// Validates raw user input and identifies the issuing bank.
///
/// # Example
///
/// ```
/// use cc_bankid::{check_card, ValidationError};
/// use cc_bankid::bin::TableLoader;
///
/// let table = TableLoader::parse("Test Bank,411100,411199").unwrap();
///
/// let report = check_card("4111-1111-1111-1111", &table).unwrap();
/// assert_eq!(report.bank.as_deref(), Some("Test Bank"));
/// assert_eq!(report.masked, "****-****-****-1111");
///
/// let err = check_card("4111-1111-1111-1112", &table).unwrap_err();
/// assert_eq!(err, ValidationError::InvalidChecksum);
/// ```
pub fn check_card(raw: &str, table: &RangeTable) -> Result<CardReport, ValidationError> {
    let card = CardNumber::parse(raw)?;

    if !luhn::is_valid_luhn(card.as_str()) {
        trace!(card = %mask_with_bin(card.as_str()), "luhn check failed");
        return Err(ValidationError::InvalidChecksum);
    }

    let issuer_id = card.issuer_id();
    let resolution = resolve_bank(issuer_id, table);
    trace!(
        card = %mask_with_bin(card.as_str()),
        issuer_id,
        bank = %resolution,
        "card accepted"
    );

    Ok(CardReport {
        masked: card.masked(),
        length: card.len(),
        issuer_id,
        bank: resolution.bank().map(str::to_owned),
    })
}

/// Quick boolean check: well formed and passes Luhn.
///
/// # Example
///
/// ```
/// use cc_bankid::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111 1111 1111 1112"));
/// assert!(!is_valid("79927398713"));
/// ```
pub fn is_valid(raw: &str) -> bool {
    let cleaned = strip_formatting(raw);
    is_valid_format(&cleaned) && luhn::is_valid_luhn(&cleaned)
}
