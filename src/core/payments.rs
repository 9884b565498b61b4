//! Payment method aggregations.
//!
//! The payment methods page charts per-month transaction counts broken down
//! by payment type. Payments join to orders on order id to pick up the
//! purchase timestamp; the join is inner, so a payment whose order is
//! missing from the orders table is dropped.

use crate::core::month::{MonthBucket, MonthRange};
use crate::errors::Result;
use crate::records::{Order, Payment};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Transaction count for one payment type in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodCount {
    /// Calendar month of the order the payments belong to
    pub month: MonthBucket,
    /// Payment type as recorded in the source data
    pub payment_type: String,
    /// Number of payments of this type in the month
    pub count: u64,
}

/// Counts payments per (month, payment type) within the inclusive
/// `[start, end]` range.
///
/// An empty `type_filter` means no restriction - all payment types are
/// reported. Output is ordered by month, then payment type ascending.
///
/// # Errors
/// Returns [`Error::InvalidRange`](crate::errors::Error::InvalidRange) if
/// `start` is later than `end`.
pub fn payment_methods_by_month(
    payments: &[Payment],
    orders: &[Order],
    start: MonthBucket,
    end: MonthBucket,
    type_filter: &BTreeSet<String>,
) -> Result<Vec<PaymentMethodCount>> {
    let range = MonthRange::new(start, end)?;

    let month_by_order: HashMap<&str, MonthBucket> = orders
        .iter()
        .map(|order| {
            (
                order.order_id.as_str(),
                MonthBucket::from_datetime(order.order_purchase_timestamp),
            )
        })
        .collect();

    let mut counts: BTreeMap<(MonthBucket, &str), u64> = BTreeMap::new();
    for payment in payments {
        // Inner join: payments without a matching order are dropped.
        let Some(&month) = month_by_order.get(payment.order_id.as_str()) else {
            continue;
        };
        if !range.contains(month) {
            continue;
        }
        if !type_filter.is_empty() && !type_filter.contains(&payment.payment_type) {
            continue;
        }

        *counts
            .entry((month, payment.payment_type.as_str()))
            .or_insert(0) += 1;
    }

    Ok(counts
        .into_iter()
        .map(|((month, payment_type), count)| PaymentMethodCount {
            month,
            payment_type: payment_type.to_string(),
            count,
        })
        .collect())
}

/// Sorted distinct payment types present in the payments table, used as the
/// payment-method filter options.
#[must_use]
pub fn payment_types(payments: &[Payment]) -> Vec<String> {
    let types: BTreeSet<&str> = payments
        .iter()
        .map(|payment| payment.payment_type.as_str())
        .collect();
    types.into_iter().map(str::to_string).collect()
}
