//! `ShopLens` - the reproducible core of an e-commerce analytics dashboard
//!
//! This crate loads six read-only CSV tables (customers, orders, order items,
//! products, category translations, payments) into memory once per process
//! and exposes a pure aggregation pipeline over them: customer counts by
//! state and city, order volume per month with category filters, and payment
//! method breakdowns per month. The presentation layer (widgets and charts)
//! is an external collaborator that feeds filter parameters in and renders
//! the small summary tables that come back.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Performance
    clippy::inefficient_to_string,
    clippy::needless_pass_by_value,

    // Correctness
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::must_use_candidate,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration management for dataset locations
pub mod config;
/// Core aggregation pipeline - pure functions over the loaded tables
pub mod core;
/// Dataset loading and the process-wide table cache
pub mod dataset;
/// Unified error types and result handling
pub mod errors;
/// Typed rows for the six source tables
pub mod records;

#[cfg(test)]
pub mod test_utils;
