//! Order trend aggregations.
//!
//! The order trends page charts order volume per month, optionally filtered
//! to a month range and a set of English product categories. The join from
//! orders through order items to category translations is left-preserving:
//! an order with no items, or an item whose product or translation is
//! missing, keeps its row with a null category rather than being dropped.
//! Counts are joined rows, so an order with N items contributes N.

use crate::core::month::{MonthBucket, MonthRange};
use crate::errors::Result;
use crate::records::{CategoryTranslation, Order, OrderItem, Product};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Order count for a single month bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    /// Calendar month the orders fall in
    pub month: MonthBucket,
    /// Number of joined order rows in the month
    pub count: u64,
}

/// Counts order rows per month within the inclusive `[start, end]` range.
///
/// Pipeline: left-join orders through order items, products, and category
/// translations; bucket each order's purchase timestamp to its calendar
/// month; keep months inside the range; apply the category filter; group by
/// month and count rows. Output is ordered by month ascending.
///
/// `category_filter` holds English category names. When empty, no category
/// restriction applies. When non-empty, only rows whose English category is
/// in the set survive - rows with a null category are excluded along with
/// non-matching ones.
///
/// # Errors
/// Returns [`Error::InvalidRange`](crate::errors::Error::InvalidRange) if
/// `start` is later than `end`.
pub fn orders_by_month(
    orders: &[Order],
    order_items: &[OrderItem],
    products: &[Product],
    translations: &[CategoryTranslation],
    start: MonthBucket,
    end: MonthBucket,
    category_filter: &BTreeSet<String>,
) -> Result<Vec<MonthCount>> {
    let range = MonthRange::new(start, end)?;

    let category_by_product = category_index(products, translations);

    let mut items_by_order: HashMap<&str, Vec<&OrderItem>> = HashMap::new();
    for item in order_items {
        items_by_order
            .entry(item.order_id.as_str())
            .or_default()
            .push(item);
    }

    let mut counts: BTreeMap<MonthBucket, u64> = BTreeMap::new();
    for order in orders {
        let month = MonthBucket::from_datetime(order.order_purchase_timestamp);
        if !range.contains(month) {
            continue;
        }

        match items_by_order.get(order.order_id.as_str()) {
            Some(items) => {
                for item in items {
                    let category = category_by_product
                        .get(item.product_id.as_str())
                        .copied()
                        .flatten();
                    if category_matches(category, category_filter) {
                        *counts.entry(month).or_insert(0) += 1;
                    }
                }
            }
            // Left join: an order with no items keeps one row, category null.
            None => {
                if category_matches(None, category_filter) {
                    *counts.entry(month).or_insert(0) += 1;
                }
            }
        }
    }

    Ok(counts
        .into_iter()
        .map(|(month, count)| MonthCount { month, count })
        .collect())
}

/// Sorted distinct purchase months across all orders, used to bound the
/// date-range pickers.
#[must_use]
pub fn available_months(orders: &[Order]) -> Vec<MonthBucket> {
    let months: BTreeSet<MonthBucket> = orders
        .iter()
        .map(|order| MonthBucket::from_datetime(order.order_purchase_timestamp))
        .collect();
    months.into_iter().collect()
}

/// Sorted distinct English category names, used as the category filter
/// options.
#[must_use]
pub fn english_categories(translations: &[CategoryTranslation]) -> Vec<String> {
    let names: BTreeSet<&str> = translations
        .iter()
        .map(|t| t.product_category_name_english.as_str())
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// Maps each product id to its English category, when one resolves. Both
/// lookup failures (unknown product category, untranslated category)
/// surface as `None`.
fn category_index<'a>(
    products: &'a [Product],
    translations: &'a [CategoryTranslation],
) -> HashMap<&'a str, Option<&'a str>> {
    let english_by_local: HashMap<&str, &str> = translations
        .iter()
        .map(|t| {
            (
                t.product_category_name.as_str(),
                t.product_category_name_english.as_str(),
            )
        })
        .collect();

    products
        .iter()
        .map(|product| {
            let english = product
                .product_category_name
                .as_deref()
                .and_then(|local| english_by_local.get(local).copied());
            (product.product_id.as_str(), english)
        })
        .collect()
}

fn category_matches(category: Option<&str>, filter: &BTreeSet<String>) -> bool {
    if filter.is_empty() {
        return true;
    }
    category.is_some_and(|name| filter.contains(name))
}
