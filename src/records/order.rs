//! Order record - one purchase event with its timestamp.
//!
//! The purchase timestamp is parsed into a `NaiveDateTime` at load time so
//! that month bucketing downstream never has to re-parse text. A row with a
//! malformed timestamp fails the whole load.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Timestamp format used by the source CSV exports
const PURCHASE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the orders table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for the order
    pub order_id: String,
    /// Customer who placed the order
    pub customer_id: String,
    /// When the order was placed; bucketed to a calendar month downstream
    #[serde(deserialize_with = "deserialize_purchase_timestamp")]
    pub order_purchase_timestamp: NaiveDateTime,
}

fn deserialize_purchase_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, PURCHASE_TIMESTAMP_FORMAT)
        .map_err(serde::de::Error::custom)
}
