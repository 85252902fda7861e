//! # cc_bankid
//!
//! Card number validation with Luhn checking and bank identification from a
//! BIN range table.
//!
//! ## Features
//!
//! - Format check (13-19 digits, spaces and hyphens stripped)
//! - Luhn checksum validation
//! - Issuer lookup from a `name,low,high` range table, first match wins
//! - Interactive prompt loop and one-shot CLI (`cli` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_bankid::{check_card, is_valid};
//! use cc_bankid::bin::TableLoader;
//!
//! let table = TableLoader::parse("BankA,400000,400999\nBankB,400500,401000\n").unwrap();
//!
//! let report = check_card("4006 0000 0000 0006", &table).unwrap();
//! assert_eq!(report.bank.as_deref(), Some("BankA"));
//!
//! assert!(is_valid("4111111111111111"));
//! assert!(!is_valid("4111111111111112"));
//! ```
//!
//! ## Range Table Format
//!
//! ```text
//! Sberbank,427600,427699
//! Tinkoff Bank,437772,437773
//! ```
//!
//! Blank lines are ignored. Any malformed line fails the whole load.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | Command-line tool (default) |
//! | `serde` | `Serialize` for [`CardReport`] |
//!
//! ## Security
//!
//! - Card numbers are zeroized when a `CardNumber` is dropped
//! - `Debug` and `Display` show masked numbers only
//! - Logs carry the BIN and last four digits at most
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[path = "bindb/mod.rs"]
pub mod bin;
pub mod card;
pub mod error;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod session;
pub mod validate;

// Re-export main types at crate root
pub use bin::{extract_issuer_id, resolve_bank, BankRange, RangeTable, Resolution, TableLoader};
pub use card::{CardNumber, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use error::{LoadError, ParseError, ValidationError};
pub use format::is_valid_format;
pub use luhn::is_valid_luhn;
pub use validate::{check_card, is_valid, CardReport};
