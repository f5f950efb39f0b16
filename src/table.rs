//! Sorted Range Tables
//!
//! The lookup core: an immutable, binary-searchable index over one address
//! family's ranges. Construction is all-or-nothing - parse every row, verify
//! the table is homogeneous in family, sort, and only then expose the table.
//! Once built the table is never mutated, so any number of threads can query
//! it without synchronization.

use crate::entry::{Family, RangeEntry};
use crate::error::{GeoblockError, Result};
use std::net::IpAddr;

/// Immutable, sorted index over one address family's ranges
#[derive(Debug, Clone)]
pub struct RangeTable {
    /// Entries sorted ascending by (start, end, country_code)
    entries: Vec<RangeEntry>,
    family: Family,
}

impl RangeTable {
    /// Build a table from already-parsed entries.
    ///
    /// Fails with [`GeoblockError::EmptyDatabase`] on empty input and with
    /// [`GeoblockError::VersionMismatch`] (naming the offending index) if
    /// any entry's family differs from the first entry's. On success the
    /// entries are sorted by the full `(start, end, country_code)` tuple,
    /// making construction deterministic for any input order.
    pub fn build(mut entries: Vec<RangeEntry>) -> Result<RangeTable> {
        let family = match entries.first() {
            Some(first) => first.family(),
            None => return Err(GeoblockError::EmptyDatabase),
        };

        if let Some(row) = entries.iter().position(|e| e.family() != family) {
            return Err(GeoblockError::VersionMismatch { row });
        }

        entries.sort();

        Ok(RangeTable { entries, family })
    }

    /// Parse raw 3-field rows and build a table from them.
    ///
    /// Aborts on the first row that fails to parse; no partial table is
    /// ever produced.
    pub fn from_rows<I, S>(rows: I) -> Result<RangeTable>
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: AsRef<str>,
    {
        let entries = rows
            .into_iter()
            .map(|(start, end, code)| {
                RangeEntry::from_row(start.as_ref(), end.as_ref(), code.as_ref())
            })
            .collect::<Result<Vec<_>>>()?;

        RangeTable::build(entries)
    }

    /// Resolve an address to the country code of its owning range.
    ///
    /// Binary search for the rightmost entry whose `start <= addr` (an
    /// upper-bound search on start, stepping one back), then bounds check
    /// against that entry's `end`. Returns `None` when the address falls
    /// before every range or in a gap after the nearest-preceding range.
    ///
    /// The caller routes by family first
    /// ([`GeoDatabase`](crate::database::GeoDatabase) does this); querying
    /// with the other family's address never matches anything but is
    /// otherwise a contract violation, not an error.
    ///
    /// Known limitation: overlapping ranges are not disambiguated. The
    /// winner is the latest-starting candidate, not necessarily the most
    /// specific containing range.
    pub fn find(&self, addr: IpAddr) -> Option<&str> {
        let upper = self.entries.partition_point(|e| e.start <= addr);
        let candidate = &self.entries[upper.checked_sub(1)?];

        if candidate.contains(addr) {
            Some(&candidate.country_code)
        } else {
            None
        }
    }

    /// Address family shared by every entry in the table
    pub fn family(&self) -> Family {
        self.family
    }

    /// Number of ranges in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built table; kept for API completeness
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in sorted order
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }
}
