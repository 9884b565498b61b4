//! Demo entry point: loads the dataset and prints one pass of every
//! aggregation over the full month span. The interactive presentation layer
//! lives elsewhere; this binary only exercises the pipeline.

use dotenvy::dotenv;
use shoplens::config;
use shoplens::core::demographics::{self, SortDirection, SortKey};
use shoplens::core::{orders, payments, summary};
use shoplens::dataset::Dataset;
use shoplens::errors::Result;
use std::collections::BTreeSet;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    let paths = app_config.dataset_paths();

    // 4. Load the dataset once for the process lifetime
    let dataset = Dataset::global(&paths)
        .inspect(|_| info!("Dataset ready"))
        .inspect_err(|e| error!("Failed to load dataset: {e}"))?;

    // 5. Customer demographics
    let states =
        demographics::customers_by_state(&dataset.customers, SortKey::Count, SortDirection::Descending);
    println!("Customers by state");
    println!("{}", summary::format_state_counts(&states));

    if let Some(top_state) = states.first() {
        let cities = demographics::customers_by_city(&dataset.customers, &top_state.state);
        println!("{}", summary::format_city_breakdown(&top_state.state, &cities));
    }

    // 6. Order trends and payment methods over the full month span
    let months = orders::available_months(&dataset.orders);
    if let (Some(&start), Some(&end)) = (months.first(), months.last()) {
        let all_categories = BTreeSet::new();
        let trend = orders::orders_by_month(
            &dataset.orders,
            &dataset.order_items,
            &dataset.products,
            &dataset.category_translations,
            start,
            end,
            &all_categories,
        )?;
        println!("Orders per month");
        println!("{}", summary::format_month_series(&trend));

        let all_types = BTreeSet::new();
        let methods = payments::payment_methods_by_month(
            &dataset.payments,
            &dataset.orders,
            start,
            end,
            &all_types,
        )?;
        println!("Payments per month by method");
        println!("{}", summary::format_payment_breakdown(&methods));
    }

    Ok(())
}
