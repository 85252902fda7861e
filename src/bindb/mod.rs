//! BIN (Bank Identification Number) range table and issuer lookup.
//!
//! A table is a list of `name,low,high` records loaded once from a text file.
//! Lookups scan the records in file order and the first range containing the
//! BIN wins, so overlapping ranges are resolved by position.
//!
//! # Example
//!
//! ```
//! use cc_bankid::bin::{extract_issuer_id, resolve_bank, Resolution, TableLoader};
//!
//! let table = TableLoader::parse("BankA,400000,400999\nBankB,400500,401000\n").unwrap();
//!
//! let bin = extract_issuer_id("4006001234567893");
//! assert_eq!(bin, Some(400600));
//! assert_eq!(resolve_bank(bin, &table), Resolution::Known("BankA"));
//! assert_eq!(resolve_bank(Some(123456), &table), Resolution::Unknown);
//! ```

mod loader;
mod memory;

pub use loader::TableLoader;
pub use memory::RangeTable;

use crate::error::{BoundField, ParseError, ParseErrorKind};
use std::fmt;
use std::str::FromStr;

/// Number of leading digits that make up the issuer identification number.
pub const BIN_LENGTH: usize = 6;

/// An inclusive range of issuer IDs assigned to one bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BankRange {
    /// Name of the issuing bank.
    pub name: String,
    /// Start of the range (inclusive).
    pub low: i64,
    /// End of the range (inclusive).
    pub high: i64,
}

impl BankRange {
    /// Creates a range, rejecting `low > high` and names that would not
    /// survive a write and reload of the table.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_bankid::bin::BankRange;
    ///
    /// assert!(BankRange::new("Tinkoff Bank", 437772, 437773).is_ok());
    /// assert!(BankRange::new("Tinkoff Bank", 437773, 437772).is_err());
    /// assert!(BankRange::new("Bank, Ltd", 1, 2).is_err());
    /// ```
    pub fn new(name: impl Into<String>, low: i64, high: i64) -> Result<Self, ParseErrorKind> {
        let name = name.into();
        if !Self::is_storable_name(&name) {
            return Err(ParseErrorKind::InvalidName { name });
        }
        if low > high {
            return Err(ParseErrorKind::InvertedRange { low, high });
        }
        Ok(Self { name, low, high })
    }

    /// Returns true if `name` reads back unchanged from a `name,low,high` line.
    ///
    /// The line format has no escaping and lines are trimmed on load, so a
    /// name may not contain `,`, `\n` or `\r`, nor start with whitespace.
    pub fn is_storable_name(name: &str) -> bool {
        let breaks_record = name.contains(|c: char| matches!(c, ',' | '\n' | '\r'));
        !breaks_record && !name.starts_with(char::is_whitespace)
    }

    /// Checks if a BIN falls within this range.
    #[inline]
    pub fn contains(&self, bin: i64) -> bool {
        self.low <= bin && bin <= self.high
    }

    /// Parses one already-trimmed `name,low,high` record.
    ///
    /// `line` is the 1-based position used in the error. Fields are not
    /// trimmed individually, so `"Bank, 1,2"` is rejected.
    pub fn parse_record(line: usize, record: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = record.split(',').collect();
        let (name, low, high) = match fields.as_slice() {
            &[name, low, high] => (name, low, high),
            _ => {
                return Err(ParseError::new(
                    line,
                    ParseErrorKind::FieldCount {
                        found: fields.len(),
                        content: record.to_string(),
                    },
                ))
            }
        };

        let low = parse_bound(line, BoundField::Low, low)?;
        let high = parse_bound(line, BoundField::High, high)?;

        Self::new(name, low, high).map_err(|kind| ParseError::new(line, kind))
    }
}

fn parse_bound(line: usize, field: BoundField, value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| {
        ParseError::new(
            line,
            ParseErrorKind::InvalidBound {
                field,
                value: value.to_string(),
            },
        )
    })
}

impl fmt::Display for BankRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.low, self.high)
    }
}

impl FromStr for BankRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_record(1, s.trim())
    }
}

/// Outcome of a bank lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The first matching range's bank name.
    Known(&'a str),
    /// No range matched, or there was no BIN to look up.
    Unknown,
}

impl<'a> Resolution<'a> {
    /// Returns the bank name, if one was found.
    pub fn bank(&self) -> Option<&'a str> {
        match *self {
            Self::Known(name) => Some(name),
            Self::Unknown => None,
        }
    }

    /// Returns true if no bank matched.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => f.write_str(name),
            Self::Unknown => f.write_str("unknown issuer"),
        }
    }
}

/// Reads the leading 6 characters of a card number as an integer.
///
/// Returns `None` if the string is shorter than 6 bytes or the prefix does
/// not parse. Leading zeros collapse: `"004000..."` gives `4000`.
///
/// # Example
///
/// ```
/// use cc_bankid::bin::extract_issuer_id;
///
/// assert_eq!(extract_issuer_id("411111111111111"), Some(411111));
/// assert_eq!(extract_issuer_id("41111"), None);
/// ```
pub fn extract_issuer_id(s: &str) -> Option<i64> {
    s.get(..BIN_LENGTH)?.parse().ok()
}

/// Looks up a BIN in the table; `None` always resolves to `Unknown`.
#[inline]
pub fn resolve_bank(bin: Option<i64>, table: &RangeTable) -> Resolution<'_> {
    match bin {
        Some(bin) => table.resolve(bin),
        None => Resolution::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlapping() -> RangeTable {
        RangeTable::from_ranges(vec![
            BankRange::new("BankA", 400000, 400999).unwrap(),
            BankRange::new("BankB", 400500, 401000).unwrap(),
        ])
    }

    #[test]
    fn test_bank_range_contains() {
        let range = BankRange::new("Test", 411111, 411199).unwrap();
        assert!(range.contains(411111));
        assert!(range.contains(411150));
        assert!(range.contains(411199));
        assert!(!range.contains(411100));
        assert!(!range.contains(411200));
    }

    #[test]
    fn test_bank_range_rejects_inverted() {
        assert_eq!(
            BankRange::new("Test", 2, 1),
            Err(ParseErrorKind::InvertedRange { low: 2, high: 1 })
        );
        assert!(BankRange::new("Test", 5, 5).is_ok());
    }

    #[test]
    fn test_bank_range_rejects_unstorable_names() {
        for name in [" Lead", "\tTab", "A,B", "x\ny", "CR\r"] {
            assert_eq!(
                BankRange::new(name, 1, 2),
                Err(ParseErrorKind::InvalidName {
                    name: name.to_string()
                }),
                "{:?} should be rejected",
                name
            );
        }

        // Trailing whitespace sits before the comma, so it survives
        assert!(BankRange::new("Trailing ", 1, 2).is_ok());
        assert!(BankRange::new("", 1, 2).is_ok());
    }

    #[test]
    fn test_line_break_in_name_fails_parse() {
        let err = "x\ny,1,2".parse::<BankRange>().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidName {
                name: "x\ny".to_string()
            }
        );

        let err = BankRange::parse_record(2, "A\rB,1,2").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::InvalidName { .. }));
    }

    #[test]
    fn test_parse_record() {
        let range: BankRange = "Sberbank,427600,427699".parse().unwrap();
        assert_eq!(range, BankRange::new("Sberbank", 427600, 427699).unwrap());
    }

    #[test]
    fn test_parse_record_errors() {
        let err = BankRange::parse_record(3, "Bank,1").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, ParseErrorKind::FieldCount { found: 2, .. }));

        let err = BankRange::parse_record(1, "Bank, 1,2").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidBound {
                field: BoundField::Low,
                value: " 1".to_string()
            }
        );

        let err = BankRange::parse_record(1, "Bank,1,x").unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::InvalidBound {
                field: BoundField::High,
                ..
            }
        ));

        let err = BankRange::parse_record(7, "Bank,9,1").unwrap_err();
        assert_eq!(err.line, 7);
        assert_eq!(err.kind, ParseErrorKind::InvertedRange { low: 9, high: 1 });
    }

    #[test]
    fn test_display_round_trip() {
        let range = BankRange::new("Tinkoff Bank", 437772, 437773).unwrap();
        assert_eq!(range.to_string(), "Tinkoff Bank,437772,437773");
        assert_eq!(range.to_string().parse::<BankRange>().unwrap(), range);

        let range = BankRange::new("Trailing ", 1, 2).unwrap();
        assert_eq!(range.to_string().parse::<BankRange>().unwrap(), range);
    }

    #[test]
    fn test_extract_issuer_id() {
        assert_eq!(extract_issuer_id("411111111111111"), Some(411111));
        assert_eq!(extract_issuer_id("004000123456789"), Some(4000));
        assert_eq!(extract_issuer_id("411111"), Some(411111));
        assert_eq!(extract_issuer_id("41111"), None);
        assert_eq!(extract_issuer_id(""), None);
        assert_eq!(extract_issuer_id("41a111111111111"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let table = overlapping();
        assert_eq!(resolve_bank(Some(400600), &table), Resolution::Known("BankA"));
        assert_eq!(resolve_bank(Some(401000), &table), Resolution::Known("BankB"));
        assert_eq!(resolve_bank(Some(399999), &table), Resolution::Unknown);
    }

    #[test]
    fn test_missing_bin_is_unknown() {
        assert_eq!(resolve_bank(None, &overlapping()), Resolution::Unknown);
    }

    #[test]
    fn test_empty_table_is_unknown() {
        let table = RangeTable::default();
        assert_eq!(resolve_bank(Some(400600), &table), Resolution::Unknown);
        assert_eq!(resolve_bank(Some(0), &table), Resolution::Unknown);
    }

    #[test]
    fn test_resolution_accessors() {
        assert_eq!(Resolution::Known("BankA").bank(), Some("BankA"));
        assert!(Resolution::Unknown.is_unknown());
        assert_eq!(Resolution::Unknown.bank(), None);
    }

    #[test]
    fn test_resolution_display() {
        let table = overlapping();
        assert_eq!(resolve_bank(Some(400600), &table).to_string(), "BankA");
        assert_eq!(resolve_bank(None, &table).to_string(), "unknown issuer");
    }
}
