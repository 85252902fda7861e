//! Line-oriented range table loader.
//!
//! # Supported Format
//!
//! ```text
//! Sberbank,427600,427699
//! Tinkoff Bank,437772,437773
//!
//! Alfa-Bank,415428,415429
//! ```
//!
//! One `name,low,high` record per line, no header, no quoting. Surrounding
//! whitespace is trimmed and blank lines are skipped. Loading is
//! all-or-nothing: the first bad line aborts with no table.

use super::{BankRange, RangeTable};
use crate::error::LoadError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Range table loader.
pub struct TableLoader;

impl TableLoader {
    /// Loads a range table from a file.
    ///
    /// The file handle is dropped before returning, on success or error.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cc_bankid::bin::TableLoader;
    ///
    /// let table = TableLoader::from_file("banks.txt")?;
    /// println!("{} ranges", table.len());
    /// # Ok::<(), cc_bankid::LoadError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RangeTable, LoadError> {
        let path = path.as_ref();
        let io_err = |source| LoadError::Io {
            path: Some(path.to_path_buf()),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let table = Self::read_ranges(BufReader::new(file)).map_err(|e| match e {
            LoadError::Io { path: None, source } => io_err(source),
            other => other,
        })?;

        debug!(path = %path.display(), ranges = table.len(), "loaded range table");
        Ok(table)
    }

    /// Loads a range table from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<RangeTable, LoadError> {
        let table = Self::read_ranges(reader)?;
        debug!(ranges = table.len(), "loaded range table");
        Ok(table)
    }

    /// Loads a range table from a string.
    pub fn parse(source: &str) -> Result<RangeTable, LoadError> {
        Self::from_reader(source.as_bytes())
    }

    fn read_ranges<R: BufRead>(reader: R) -> Result<RangeTable, LoadError> {
        let mut ranges = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io { path: None, source })?;
            let record = line.trim();
            if record.is_empty() {
                continue;
            }
            ranges.push(BankRange::parse_record(index + 1, record)?);
        }

        Ok(RangeTable::from_ranges(ranges))
    }
}
