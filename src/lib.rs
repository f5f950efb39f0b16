//! Geoblock - Country Lookup for IP Addresses
//!
//! Geoblock answers "which country does this IP address belong to?" by
//! consulting two immutable, sorted range tables (one per address family)
//! built from the public geolite2-country CSV datasets.
//!
//! # Quick Start
//!
//! ```rust
//! use geoblock::{GeoDatabase, RangeTable};
//!
//! // Build tables from (start, end, country_code) rows
//! let v4 = RangeTable::from_rows(vec![
//!     ("1.0.0.0", "1.0.0.255", "AU"),
//!     ("1.1.0.0", "1.1.0.255", "CN"),
//! ])?;
//! let v6 = RangeTable::from_rows(vec![("2001:db8::", "2001:db8::ff", "US")])?;
//!
//! // Pair them and resolve textual addresses
//! let db = GeoDatabase::new(v4, v6);
//! assert_eq!(db.resolve("1.0.0.5")?, Some("AU"));
//! assert_eq!(db.resolve("2001:db8::10")?, Some("US"));
//!
//! // Uncovered addresses are a miss, not an error
//! assert_eq!(db.resolve("9.9.9.9")?, None);
//! # Ok::<(), geoblock::GeoblockError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! CSV rows ──> RangeEntry ──> family check ──> sort by start ──> RangeTable
//!                                                                    │
//! "1.2.3.4" ──> IpAddr ──> GeoDatabase routes by family ──> binary search
//! ```
//!
//! Tables are built once at startup (all-or-nothing) and never mutated, so
//! lookups are lock-free and safe from any number of threads. Lookup is
//! O(log n): an upper-bound binary search on range starts followed by a
//! bounds check against the candidate's end.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
/// Paired v4/v6 lookup database
pub mod database;
/// Range records and address families
pub mod entry;
/// Error types for geoblock operations
pub mod error;
/// Dataset download and local cache
pub mod fetch;
/// CSV dataset ingestion
pub mod loader;
/// Sorted, binary-searchable range tables
pub mod table;

// Re-exports for consumers

/// Country lookup database pairing an IPv4 and an IPv6 table
pub use crate::database::GeoDatabase;

/// One [start, end] range mapped to a country code
pub use crate::entry::{Family, RangeEntry};

pub use crate::error::{GeoblockError, Result};

/// Immutable sorted index over one address family's ranges
pub use crate::table::RangeTable;

// Version information
/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
