//! Payment record - one payment against an order.
//!
//! An order can have several payments (installments, vouchers). Payments
//! join to orders inner-style: a payment whose order is missing from the
//! orders table is dropped, not kept with nulls.

use serde::{Deserialize, Serialize};

/// One row of the payments table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Order the payment belongs to
    pub order_id: String,
    /// Payment method as recorded in the source (e.g., "credit_card", "boleto")
    pub payment_type: String,
    /// Amount paid
    pub payment_value: f64,
}
