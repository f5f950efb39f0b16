//! Error types for the geoblock library

use std::fmt;

/// Result type alias for geoblock operations
pub type Result<T> = std::result::Result<T, GeoblockError>;

/// Main error type for geoblock operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoblockError {
    /// Malformed IP address literal
    Parse(String),

    /// A single range whose start and end are in different address families
    FamilyMismatch {
        /// Start literal as parsed
        start: String,
        /// End literal as parsed
        end: String,
    },

    /// A table mixing IPv4 and IPv6 entries
    VersionMismatch {
        /// Index of the first entry whose family differs from the first entry's
        row: usize,
    },

    /// No rows supplied to build
    EmptyDatabase,

    /// I/O errors from the loader or fetcher
    Io(String),

    /// Structurally malformed CSV input (wrong field count, bad quoting)
    Csv(String),
}

impl fmt::Display for GeoblockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoblockError::Parse(msg) => write!(f, "Invalid IP address: {}", msg),
            GeoblockError::FamilyMismatch { start, end } => {
                write!(f, "Range spans address families: {} .. {}", start, end)
            }
            GeoblockError::VersionMismatch { row } => {
                write!(f, "Mixed address families in database (row {})", row)
            }
            GeoblockError::EmptyDatabase => write!(f, "Empty database: no ranges supplied"),
            GeoblockError::Io(msg) => write!(f, "I/O error: {}", msg),
            GeoblockError::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for GeoblockError {}

impl From<std::io::Error> for GeoblockError {
    fn from(err: std::io::Error) -> Self {
        GeoblockError::Io(err.to_string())
    }
}

impl From<csv::Error> for GeoblockError {
    fn from(err: csv::Error) -> Self {
        // Keep read failures distinct from structural CSV problems
        if matches!(err.kind(), csv::ErrorKind::Io(_)) {
            GeoblockError::Io(err.to_string())
        } else {
            GeoblockError::Csv(err.to_string())
        }
    }
}
