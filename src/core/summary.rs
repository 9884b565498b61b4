//! Text rendering of aggregation output.
//!
//! These formatters turn pipeline results into small aligned text tables
//! for terminal display. The real presentation layer consumes the typed
//! rows directly; only the demo binary goes through here.

use crate::core::demographics::{CityCount, StateCount};
use crate::core::orders::MonthCount;
use crate::core::payments::PaymentMethodCount;
use std::fmt::Write;

const BAR_WIDTH: u64 = 40;

/// Formats per-state customer counts, one line per state.
#[must_use]
pub fn format_state_counts(rows: &[StateCount]) -> String {
    let mut out = String::new();
    for row in rows {
        // write! is infallible when writing to String, so unwrap is safe
        writeln!(out, "  {:<4} {:>8}", row.state, row.count).unwrap();
    }
    out
}

/// Formats a city breakdown for one state, "Others" row included.
#[must_use]
pub fn format_city_breakdown(state: &str, rows: &[CityCount]) -> String {
    let mut out = format!("Customers by city in {state}\n");
    for row in rows {
        writeln!(out, "  {:<24} {:>8}", row.city, row.count).unwrap();
    }
    out
}

/// Formats a month series as label, proportional bar, and count per line.
#[must_use]
pub fn format_month_series(rows: &[MonthCount]) -> String {
    let max = rows.iter().map(|row| row.count).max().unwrap_or(0).max(1);

    let mut out = String::new();
    for row in rows {
        let width = usize::try_from(row.count * BAR_WIDTH / max).unwrap_or_default();
        let bar = "#".repeat(width);
        writeln!(out, "  {}  {:<40} {:>8}", row.month, bar, row.count).unwrap();
    }
    out
}

/// Formats per-month payment method counts, one line per (month, type).
#[must_use]
pub fn format_payment_breakdown(rows: &[PaymentMethodCount]) -> String {
    let mut out = String::new();
    for row in rows {
        writeln!(
            out,
            "  {}  {:<16} {:>8}",
            row.month, row.payment_type, row.count
        )
        .unwrap();
    }
    out
}
