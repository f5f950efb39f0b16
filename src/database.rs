//! Paired Lookup Database
//!
//! Pairs an IPv4 and an IPv6 [`RangeTable`] and dispatches each query to the
//! right one by the query's own address family. This is the primary public
//! API for resolving addresses to country codes.
//!
//! A `GeoDatabase` is a plain value: build it once at startup and pass it by
//! reference to whatever serves requests. Lookups take `&self`, so concurrent
//! readers need no locking.

use crate::entry::Family;
use crate::error::{GeoblockError, Result};
use crate::fetch;
use crate::loader;
use crate::table::RangeTable;
use std::net::IpAddr;
use std::path::Path;

/// Country lookup database: one range table per address family
///
/// # Examples
///
/// ```
/// use geoblock::{GeoDatabase, RangeTable};
///
/// let v4 = RangeTable::from_rows(vec![("1.0.0.0", "1.0.0.255", "AU")])?;
/// let v6 = RangeTable::from_rows(vec![("2001:db8::", "2001:db8::ff", "US")])?;
/// let db = GeoDatabase::new(v4, v6);
///
/// assert_eq!(db.resolve("1.0.0.5")?, Some("AU"));
/// assert_eq!(db.resolve("2001:db8::10")?, Some("US"));
/// assert_eq!(db.resolve("9.9.9.9")?, None);
/// # Ok::<(), geoblock::GeoblockError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeoDatabase {
    v4: RangeTable,
    v6: RangeTable,
}

impl GeoDatabase {
    /// Pair two built tables into a database.
    ///
    /// The caller supplies the IPv4 table first; each table's family is
    /// fixed by its contents at build time.
    pub fn new(v4: RangeTable, v6: RangeTable) -> GeoDatabase {
        GeoDatabase { v4, v6 }
    }

    /// Load both cached dataset files from `dir`.
    ///
    /// Expects the filenames written by [`fetch::ensure_cached`].
    pub fn from_dir(dir: &Path) -> Result<GeoDatabase> {
        let v4 = loader::load_path(&dir.join(fetch::V4_FILE))?;
        let v6 = loader::load_path(&dir.join(fetch::V6_FILE))?;
        Ok(GeoDatabase::new(v4, v6))
    }

    /// Resolve a textual IP address to its country code.
    ///
    /// Fails with [`GeoblockError::Parse`] if the text is not a valid IP
    /// literal. A well-formed address that no range covers is `Ok(None)`,
    /// never an error - the two outcomes are deliberately distinct.
    pub fn resolve(&self, address: &str) -> Result<Option<&str>> {
        let addr: IpAddr = address
            .parse()
            .map_err(|_| GeoblockError::Parse(address.to_string()))?;
        Ok(self.lookup(addr))
    }

    /// Resolve an already-parsed address, routing by its family
    pub fn lookup(&self, addr: IpAddr) -> Option<&str> {
        match Family::of(&addr) {
            Family::V4 => self.v4.find(addr),
            Family::V6 => self.v6.find(addr),
        }
    }

    /// The IPv4 table
    pub fn v4(&self) -> &RangeTable {
        &self.v4
    }

    /// The IPv6 table
    pub fn v6(&self) -> &RangeTable {
        &self.v6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_db() -> GeoDatabase {
        let v4 = RangeTable::from_rows(vec![
            ("1.0.0.0", "1.0.0.255", "AU"),
            ("1.1.0.0", "1.1.0.255", "CN"),
        ])
        .unwrap();
        let v6 = RangeTable::from_rows(vec![("2001:db8::", "2001:db8::ff", "US")]).unwrap();
        GeoDatabase::new(v4, v6)
    }

    #[test]
    fn resolve_routes_by_family() {
        let db = fixture_db();
        assert_eq!(db.resolve("1.0.0.5").unwrap(), Some("AU"));
        assert_eq!(db.resolve("2001:db8::10").unwrap(), Some("US"));
    }

    #[test]
    fn families_are_isolated() {
        let db = fixture_db();
        // 1.0.0.5 exists in the v4 table only; its v6-mapped form must miss
        assert_eq!(db.resolve("::ffff:1.0.0.5").unwrap(), None);
        // And a v6-covered address never consults the v4 table
        assert_eq!(db.resolve("2001:db9::1").unwrap(), None);
    }

    #[test]
    fn unmatched_address_is_not_an_error() {
        let db = fixture_db();
        assert_eq!(db.resolve("9.9.9.9").unwrap(), None);
    }

    #[test]
    fn malformed_address_is_an_error() {
        let db = fixture_db();
        assert!(matches!(
            db.resolve("1.0.0.256"),
            Err(GeoblockError::Parse(_))
        ));
        assert!(matches!(db.resolve("hello"), Err(GeoblockError::Parse(_))));
    }
}
