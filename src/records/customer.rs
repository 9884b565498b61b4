//! Customer record - demographic and geographic data for one customer.
//!
//! Customers are the "one" side of every join they take part in, so counts
//! over this table are always distinct-customer counts.

use serde::{Deserialize, Serialize};

/// One row of the customers table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer
    pub customer_id: String,
    /// Two-letter state code (e.g., "SP", "RJ")
    pub customer_state: String,
    /// City name, lowercase in the source data
    pub customer_city: String,
}
