//! Customer demographic aggregations.
//!
//! Operations over the customers table: counts by state with selectable
//! ordering, and the per-state city breakdown behind the pie chart. Customer
//! rows have no fan-out join, so every count here is a distinct-customer
//! count.

use crate::records::Customer;
use serde::Serialize;
use std::collections::HashMap;

/// Label of the synthetic row aggregating cities beyond the top six.
pub const OTHERS_LABEL: &str = "Others";

/// Number of leading cities shown individually in the city breakdown.
pub const TOP_CITY_COUNT: usize = 6;

/// Sort key for [`customers_by_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Order rows by state code
    StateCode,
    /// Order rows by customer count
    Count,
}

/// Sort direction for [`customers_by_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

/// Customer count for a single state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    /// Two-letter state code
    pub state: String,
    /// Number of customers registered in the state
    pub count: u64,
}

/// Customer count for a single city, or the synthetic "Others" row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    /// City name, or [`OTHERS_LABEL`]
    pub city: String,
    /// Number of customers in the city
    pub count: u64,
}

/// Counts customers per state, one row per distinct state present.
///
/// Rows are ordered by the requested key and direction; ties are always
/// broken by state code ascending.
#[must_use]
pub fn customers_by_state(
    customers: &[Customer],
    sort_key: SortKey,
    direction: SortDirection,
) -> Vec<StateCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for customer in customers {
        *counts.entry(customer.customer_state.as_str()).or_insert(0) += 1;
    }

    let mut rows: Vec<StateCount> = counts
        .into_iter()
        .map(|(state, count)| StateCount {
            state: state.to_string(),
            count,
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match sort_key {
            SortKey::StateCode => a.state.cmp(&b.state),
            SortKey::Count => a.count.cmp(&b.count),
        };
        let ordering = match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        ordering.then_with(|| a.state.cmp(&b.state))
    });

    rows
}

/// Breaks down one state's customers by city: the top six cities by
/// descending count followed by a synthetic "Others" row summing the rest.
///
/// The "Others" row is always emitted, last, with a zero count when the
/// state has six or fewer cities; consumers that dislike a zero slice can
/// drop it. Ties at equal counts are broken by city name ascending so the
/// top-six cut is deterministic. A state code absent from the data yields
/// just the zero "Others" row.
#[must_use]
pub fn customers_by_city(customers: &[Customer], state_code: &str) -> Vec<CityCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for customer in customers {
        if customer.customer_state == state_code {
            *counts.entry(customer.customer_city.as_str()).or_insert(0) += 1;
        }
    }

    let mut cities: Vec<CityCount> = counts
        .into_iter()
        .map(|(city, count)| CityCount {
            city: city.to_string(),
            count,
        })
        .collect();
    cities.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.city.cmp(&b.city)));

    let others_total: u64 = cities.iter().skip(TOP_CITY_COUNT).map(|c| c.count).sum();
    cities.truncate(TOP_CITY_COUNT);
    cities.push(CityCount {
        city: OTHERS_LABEL.to_string(),
        count: others_total,
    });

    cities
}
