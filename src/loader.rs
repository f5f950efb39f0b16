//! CSV Dataset Ingestion
//!
//! Reads the headerless `start,end,country_code` dataset into a
//! [`RangeTable`]. The reader is the only place I/O meets parsing, and the
//! two failure modes stay distinct: a read failure surfaces as
//! [`GeoblockError::Io`], a structurally bad row (wrong field count) as
//! [`GeoblockError::Csv`], and a bad IP literal as [`GeoblockError::Parse`].

use crate::entry::RangeEntry;
use crate::error::{GeoblockError, Result};
use crate::table::RangeTable;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a range table from a CSV file on disk
pub fn load_path(path: &Path) -> Result<RangeTable> {
    let file = File::open(path)
        .map_err(|e| GeoblockError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let table = load_reader(file)?;
    debug!("loaded {} ranges from {}", table.len(), path.display());
    Ok(table)
}

/// Load a range table from any CSV byte source.
///
/// Row numbers in errors are zero-based positions in the input, reported
/// before the table sorts its entries.
pub fn load_reader<R: Read>(reader: R) -> Result<RangeTable> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (row, record) in csv.records().enumerate() {
        let record = record?;
        if record.len() != 3 {
            return Err(GeoblockError::Csv(format!(
                "row {}: expected 3 fields, got {}",
                row,
                record.len()
            )));
        }

        let entry = RangeEntry::from_row(&record[0], &record[1], &record[2]).map_err(|e| {
            match e {
                GeoblockError::Parse(lit) => GeoblockError::Parse(format!("row {}: {}", row, lit)),
                other => other,
            }
        })?;
        entries.push(entry);
    }

    RangeTable::build(entries)
}
