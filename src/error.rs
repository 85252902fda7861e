//! Error types for card validation and range table loading.
//!
//! Two families live here: [`ValidationError`] is recoverable and scoped to a
//! single card check, [`LoadError`] is fatal and aborts startup.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while validating one card number.
///
/// The first four variants form the "format" class, `InvalidChecksum` is the
/// "checksum" class. Neither affects the range table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty after stripping spaces and hyphens.
    Empty,

    /// The card number has too few digits.
    TooShort {
        /// The actual number of characters provided.
        length: usize,
        /// The minimum required digits (13).
        minimum: usize,
    },

    /// The card number has too many digits.
    TooLong {
        /// The actual number of characters provided.
        length: usize,
        /// The maximum allowed digits (19).
        maximum: usize,
    },

    /// A character other than `0`-`9` was found.
    InvalidCharacter {
        /// The position in the cleaned string (0-indexed).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// The Luhn checksum validation failed.
    InvalidChecksum,
}

impl ValidationError {
    /// Returns true for length and character-set violations.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::InvalidChecksum)
    }

    /// Returns true when the number was well formed but failed Luhn.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, Self::InvalidChecksum)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} characters, minimum is {}",
                    length, minimum
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} characters, maximum is {}",
                    length, maximum
                )
            }

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Which bound of a `name,low,high` record failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundField {
    /// Second field.
    Low,
    /// Third field.
    High,
}

impl fmt::Display for BoundField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

/// What was wrong with a single table line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line did not split into exactly three comma-separated fields.
    FieldCount {
        /// Number of fields actually found.
        found: usize,
        /// The trimmed line content.
        content: String,
    },

    /// A bound was not a base-10 integer.
    InvalidBound {
        /// Which bound.
        field: BoundField,
        /// The offending field text.
        value: String,
    },

    /// The low bound is greater than the high bound.
    InvertedRange {
        /// Parsed low bound.
        low: i64,
        /// Parsed high bound.
        high: i64,
    },

    /// The bank name cannot be stored in a `name,low,high` line: it
    /// contains a comma or line break, or starts with whitespace.
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

/// A malformed record in a range table source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number in the source.
    pub line: usize,
    /// What went wrong on that line.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::FieldCount { found, content } => write!(
                f,
                "line {}: expected 3 fields (name,low,high), found {} in {:?}",
                self.line, found, content
            ),
            ParseErrorKind::InvalidBound { field, value } => write!(
                f,
                "line {}: invalid {} bound {:?}",
                self.line, field, value
            ),
            ParseErrorKind::InvertedRange { low, high } => write!(
                f,
                "line {}: low bound is greater than high bound ({} > {})",
                self.line, low, high
            ),
            ParseErrorKind::InvalidName { name } => {
                write!(f, "line {}: invalid bank name {:?}", self.line, name)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Fatal error while loading the range table.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    Io {
        /// The file path, when loading from a file.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The source was structurally malformed.
    Parse(ParseError),
}

impl LoadError {
    /// Returns the parse error, if this was a malformed record.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io { .. } => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "failed to read {}: {}", path.display(), source),
            Self::Io { path: None, source } => write!(f, "failed to read table: {}", source),
            Self::Parse(e) => write!(f, "malformed table: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<ParseError> for LoadError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}
