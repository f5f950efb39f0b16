//! IP Range Records
//!
//! One row of the country dataset: an inclusive `[start, end]` address range
//! mapped to a country code. Ranges never span address families; the family
//! is fixed when the row is parsed and never re-inferred downstream.

use crate::error::{GeoblockError, Result};
use std::fmt;
use std::net::IpAddr;

/// Address family of a range or table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// IPv4 (32-bit address space)
    V4,
    /// IPv6 (128-bit address space)
    V6,
}

impl Family {
    /// Family of an address
    pub fn of(addr: &IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// One inclusive address range mapped to a country code
///
/// The derived ordering is the full `(start, end, country_code)` tuple, which
/// is exactly the sort order [`RangeTable`](crate::table::RangeTable) builds
/// with - entries with equal starts tie-break on end, then on the code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RangeEntry {
    /// First address of the range (inclusive)
    pub start: IpAddr,
    /// Last address of the range (inclusive)
    pub end: IpAddr,
    /// Opaque country code, commonly ISO-3166-1 alpha-2; never validated here
    pub country_code: String,
}

impl RangeEntry {
    /// Parse one 3-field dataset row into a range entry.
    ///
    /// Both literals must use standard textual address syntax for their
    /// family and both must be in the same family. The payload passes
    /// through untouched. Note that `start <= end` is NOT checked: an
    /// inverted range is accepted and simply never matches any query.
    pub fn from_row(start: &str, end: &str, country_code: &str) -> Result<RangeEntry> {
        let start: IpAddr = start
            .parse()
            .map_err(|_| GeoblockError::Parse(start.to_string()))?;
        let end: IpAddr = end
            .parse()
            .map_err(|_| GeoblockError::Parse(end.to_string()))?;

        if Family::of(&start) != Family::of(&end) {
            return Err(GeoblockError::FamilyMismatch {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(RangeEntry {
            start,
            end,
            country_code: country_code.to_string(),
        })
    }

    /// Address family of this range (start and end always agree)
    pub fn family(&self) -> Family {
        Family::of(&self.start)
    }

    /// Whether `addr` falls inside this inclusive range.
    ///
    /// Inverted ranges contain nothing.
    pub fn contains(&self, addr: IpAddr) -> bool {
        self.start <= addr && addr <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v4_row() {
        let entry = RangeEntry::from_row("1.0.0.0", "1.0.0.255", "AU").unwrap();
        assert_eq!(entry.family(), Family::V4);
        assert_eq!(entry.country_code, "AU");
        assert!(entry.contains("1.0.0.5".parse().unwrap()));
        assert!(!entry.contains("1.0.1.0".parse().unwrap()));
    }

    #[test]
    fn parses_compressed_v6_row() {
        let entry = RangeEntry::from_row("2001:db8::", "2001:db8::ff", "US").unwrap();
        assert_eq!(entry.family(), Family::V6);
        assert!(entry.contains("2001:db8::10".parse().unwrap()));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!(matches!(
            RangeEntry::from_row("1.0.0.256", "1.0.0.255", "AU"),
            Err(GeoblockError::Parse(_))
        ));
        assert!(matches!(
            RangeEntry::from_row("1.0.0.0", "not-an-ip", "AU"),
            Err(GeoblockError::Parse(_))
        ));
    }

    #[test]
    fn rejects_mixed_family_row() {
        assert!(matches!(
            RangeEntry::from_row("1.0.0.0", "::1", "US"),
            Err(GeoblockError::FamilyMismatch { .. })
        ));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let entry = RangeEntry::from_row("1.0.0.255", "1.0.0.0", "AU").unwrap();
        assert!(!entry.contains("1.0.0.5".parse().unwrap()));
        assert!(!entry.contains("1.0.0.0".parse().unwrap()));
        assert!(!entry.contains("1.0.0.255".parse().unwrap()));
    }
}
