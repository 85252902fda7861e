//! In-memory range table.
//!
//! Ranges are kept in load order and scanned linearly. There is no sorting
//! or indexing: reordering would change which bank wins on overlap.

use super::{BankRange, Resolution};
use std::io::{self, Write};

/// An ordered, read-only collection of BIN ranges.
///
/// Built once at startup and shared by reference for every lookup.
///
/// # Example
///
/// ```
/// use cc_bankid::bin::{BankRange, RangeTable, Resolution};
///
/// let table = RangeTable::from_ranges(vec![
///     BankRange::new("Test Bank", 411100, 411199).unwrap(),
/// ]);
///
/// assert_eq!(table.resolve(411111), Resolution::Known("Test Bank"));
/// assert_eq!(table.resolve(550000), Resolution::Unknown);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable {
    ranges: Vec<BankRange>,
}

impl RangeTable {
    /// Creates a table from ranges in lookup order.
    pub fn from_ranges(ranges: Vec<BankRange>) -> Self {
        Self { ranges }
    }

    /// Returns the first range containing `bin`, scanning in stored order.
    pub fn find(&self, bin: i64) -> Option<&BankRange> {
        self.ranges.iter().find(|range| range.contains(bin))
    }

    /// Resolves a BIN to a bank name.
    #[inline]
    pub fn resolve(&self, bin: i64) -> Resolution<'_> {
        match self.find(bin) {
            Some(range) => Resolution::Known(&range.name),
            None => Resolution::Unknown,
        }
    }

    /// Returns the ranges in stored order.
    pub fn ranges(&self) -> &[BankRange] {
        &self.ranges
    }

    /// Returns an iterator over all ranges.
    pub fn iter(&self) -> impl Iterator<Item = &BankRange> {
        self.ranges.iter()
    }

    /// Returns the number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if the table has no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Writes the table in the `name,low,high` source format, one per line.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] before writing anything if
    /// a range's name would not load back unchanged (see
    /// [`BankRange::is_storable_name`]). Such ranges can only come from
    /// building a `BankRange` by hand.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        if let Some(range) = self
            .ranges
            .iter()
            .find(|range| !BankRange::is_storable_name(&range.name))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("bank name {:?} cannot be written as a table line", range.name),
            ));
        }

        for range in &self.ranges {
            writeln!(writer, "{}", range)?;
        }
        writer.flush()
    }
}

impl<'a> IntoIterator for &'a RangeTable {
    type Item = &'a BankRange;
    type IntoIter = std::slice::Iter<'a, BankRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
