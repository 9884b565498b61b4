//! Calendar month buckets and ranges.
//!
//! Every time-series aggregation groups by calendar month. [`MonthBucket`]
//! is the canonical grouping key: two timestamps in the same calendar month
//! map to the identical bucket regardless of their day or time component.
//! [`MonthRange`] is the validated, inclusive filter window the user picks
//! with the date widgets.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar year-month key, displayed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthBucket {
    year: i32,
    month: u32,
}

impl MonthBucket {
    /// Creates a bucket from explicit year and month.
    ///
    /// `month` is expected to be in `1..=12`; buckets built from timestamps
    /// or parsed from text always are.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Buckets a timestamp to its calendar month, discarding day and time.
    #[must_use]
    pub fn from_datetime(timestamp: NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    /// Year component.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month component (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse_error = || Error::Config {
            message: format!("Invalid month bucket (expected YYYY-MM): {s}"),
        };

        let (year, month) = s.split_once('-').ok_or_else(parse_error)?;
        let year: i32 = year.parse().map_err(|_| parse_error())?;
        let month: u32 = month.parse().map_err(|_| parse_error())?;
        if !(1..=12).contains(&month) {
            return Err(parse_error());
        }

        Ok(Self { year, month })
    }
}

// Buckets serialize as their display form so pipeline output is directly
// chartable as (label, value) rows.
impl Serialize for MonthBucket {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// An inclusive range of month buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: MonthBucket,
    end: MonthBucket,
}

impl MonthRange {
    /// Validates and builds an inclusive `[start, end]` range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start` is strictly later than
    /// `end`. A single-bucket range (`start == end`) is valid.
    pub fn new(start: MonthBucket, end: MonthBucket) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First month of the range.
    #[must_use]
    pub const fn start(self) -> MonthBucket {
        self.start
    }

    /// Last month of the range.
    #[must_use]
    pub const fn end(self) -> MonthBucket {
        self.end
    }

    /// Whether `bucket` falls within the range, endpoints included.
    #[must_use]
    pub fn contains(self, bucket: MonthBucket) -> bool {
        self.start <= bucket && bucket <= self.end
    }
}
