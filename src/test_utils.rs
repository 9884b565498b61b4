//! Shared test utilities for `ShopLens`.
//!
//! Builder helpers producing table rows with sensible defaults, so tests
//! only spell out the fields they care about.

use crate::records::{CategoryTranslation, Customer, Order, OrderItem, Payment, Product};
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp literal.
///
/// # Panics
/// Panics on a malformed literal; fixtures are written by hand.
#[must_use]
pub fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

/// Creates a customer row.
#[must_use]
pub fn customer(id: &str, state: &str, city: &str) -> Customer {
    Customer {
        customer_id: id.to_string(),
        customer_state: state.to_string(),
        customer_city: city.to_string(),
    }
}

/// Creates an order row with the given purchase timestamp literal.
#[must_use]
pub fn order(id: &str, customer_id: &str, purchased_at: &str) -> Order {
    Order {
        order_id: id.to_string(),
        customer_id: customer_id.to_string(),
        order_purchase_timestamp: ts(purchased_at),
    }
}

/// Creates an order item row linking an order to a product.
#[must_use]
pub fn order_item(order_id: &str, product_id: &str) -> OrderItem {
    OrderItem {
        order_id: order_id.to_string(),
        product_id: product_id.to_string(),
    }
}

/// Creates a product row; `category` is the local-language category name.
#[must_use]
pub fn product(id: &str, category: Option<&str>) -> Product {
    Product {
        product_id: id.to_string(),
        product_category_name: category.map(str::to_string),
    }
}

/// Creates a category translation row.
#[must_use]
pub fn translation(local: &str, english: &str) -> CategoryTranslation {
    CategoryTranslation {
        product_category_name: local.to_string(),
        product_category_name_english: english.to_string(),
    }
}

/// Creates a payment row with a default payment value.
#[must_use]
pub fn payment(order_id: &str, payment_type: &str) -> Payment {
    Payment {
        order_id: order_id.to_string(),
        payment_type: payment_type.to_string(),
        payment_value: 100.0,
    }
}

/// Builds a filter set from string literals.
#[must_use]
pub fn filter_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
