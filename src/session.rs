//! Interactive prompt loop.
//!
//! The session reads one card number per line and prints one verdict per
//! line. It is generic over its input and output so it can drive a terminal
//! or be fed a transcript in tests.
//!
//! # Example
//!
//! ```
//! use cc_bankid::bin::TableLoader;
//! use cc_bankid::session::Session;
//!
//! let table = TableLoader::parse("Test Bank,411100,411199").unwrap();
//! let input = "4111 1111 1111 1111\n\n";
//! let mut output = Vec::new();
//!
//! let summary = Session::new(&table).run(input.as_bytes(), &mut output).unwrap();
//! assert_eq!(summary.valid, 1);
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("Bank: Test Bank"));
//! ```

use crate::bin::RangeTable;
use crate::error::ValidationError;
use crate::validate::check_card;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Prompt shown before each read.
pub const PROMPT: &str = "\nEnter card number (Enter to exit): ";
/// Printed when the number is not 13-19 digits.
pub const MSG_FORMAT_ERROR: &str =
    "❌ Format error: the number must contain 13–19 digits (no letters or symbols).";
/// Printed when the number fails Luhn.
pub const MSG_CHECKSUM_ERROR: &str = "❌ Card number is invalid (failed the Luhn check).";
/// Printed for every accepted number.
pub const MSG_VALID: &str = "✅ Card number is valid!";
/// Printed when no range matched the BIN.
pub const MSG_ISSUER_UNKNOWN: &str = "🏦 Issuer not determined";
/// Printed when the loop ends.
pub const MSG_GOODBYE: &str = "👋 Goodbye";

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of card numbers submitted.
    pub checked: usize,
    /// Number accepted.
    pub valid: usize,
    /// Number rejected for format or checksum.
    pub rejected: usize,
}

/// An interactive validation session over a loaded table.
#[derive(Debug, Clone, Copy)]
pub struct Session<'t> {
    table: &'t RangeTable,
}

impl<'t> Session<'t> {
    /// Creates a session that resolves banks against `table`.
    pub fn new(table: &'t RangeTable) -> Self {
        Self { table }
    }

    /// Runs the prompt loop until an empty line, end of input, or a read error.
    ///
    /// Only write errors are returned; a read error is reported on `output`
    /// and ends the session normally.
    ///
    /// A final line without a trailing newline is still checked before the
    /// session ends, so `"4111111111111111"` at end of input gets a verdict.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut line = String::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "failed to read input");
                    writeln!(output, "Input error: {}", e)?;
                    break;
                }
            }

            if line.trim().is_empty() {
                break;
            }

            summary.checked += 1;
            self.report(&line, &mut output, &mut summary)?;
        }

        writeln!(output, "{}", MSG_GOODBYE)?;
        output.flush()?;
        debug!(?summary, "session finished");
        Ok(summary)
    }

    fn report<W: Write>(
        &self,
        raw: &str,
        output: &mut W,
        summary: &mut SessionSummary,
    ) -> io::Result<()> {
        match check_card(raw, self.table) {
            Ok(report) => {
                summary.valid += 1;
                writeln!(output, "{}", MSG_VALID)?;
                match report.bank {
                    Some(bank) => writeln!(output, "🏦 Bank: {}", bank),
                    None => writeln!(output, "{}", MSG_ISSUER_UNKNOWN),
                }
            }
            Err(ValidationError::InvalidChecksum) => {
                summary.rejected += 1;
                writeln!(output, "{}", MSG_CHECKSUM_ERROR)
            }
            Err(e) => {
                summary.rejected += 1;
                debug!(error = %e, "format check failed");
                writeln!(output, "{}", MSG_FORMAT_ERROR)
            }
        }
    }
}
