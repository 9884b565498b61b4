//! Unified error types for `ShopLens`.
//!
//! Two failure classes matter here: a dataset that cannot be loaded is fatal
//! (no partial dashboard is attempted), while an invalid user-selected month
//! range is recoverable - the presentation layer surfaces a message and
//! withholds the chart. An empty aggregation result is not an error at all;
//! it is a valid, renderable "no data" state.

use crate::core::month::MonthBucket;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file is unreadable or does not parse.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// A source CSV is missing, malformed, or lacks an expected column.
    /// Fatal at startup; the dataset loads completely or not at all.
    #[error("Failed to load {}: {message}", .path.display())]
    DataLoad {
        /// The file that could not be loaded
        path: PathBuf,
        /// The underlying CSV or parse failure
        message: String,
    },

    /// A user-selected month range starts after it ends. A single-bucket
    /// range (start equal to end) is valid.
    #[error("Invalid month range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested start month
        start: MonthBucket,
        /// Requested end month
        end: MonthBucket,
    },

    /// I/O error outside of CSV parsing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
