//! Order item record - the link between an order and a product.
//!
//! This is the fan-out side of the order join: an order with N items
//! contributes N joined rows to item-level aggregations.

use serde::{Deserialize, Serialize};

/// One row of the order items table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Order the item belongs to
    pub order_id: String,
    /// Product that was bought
    pub product_id: String,
}
