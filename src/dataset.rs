//! Dataset loading and the process-wide table cache.
//!
//! The six tables are read from CSV exactly once and held immutable for the
//! process lifetime. [`Dataset::global`] is the memoized entry point the
//! dashboard uses: the first call reads the files, every later call returns
//! the same handle without touching the filesystem. A failed load is
//! reported to the caller and not cached, so startup either produces a
//! complete dataset or a fatal [`Error::DataLoad`].

use crate::config::datasets::DatasetPaths;
use crate::errors::{Error, Result};
use crate::records::{CategoryTranslation, Customer, Order, OrderItem, Payment, Product};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::path::Path;
use tracing::info;

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// The six source tables, fully materialized in memory.
#[derive(Debug)]
pub struct Dataset {
    /// Customers table
    pub customers: Vec<Customer>,
    /// Orders table
    pub orders: Vec<Order>,
    /// Order items table
    pub order_items: Vec<OrderItem>,
    /// Products table
    pub products: Vec<Product>,
    /// Category translation table
    pub category_translations: Vec<CategoryTranslation>,
    /// Payments table
    pub payments: Vec<Payment>,
}

impl Dataset {
    /// Reads all six tables from disk.
    ///
    /// # Errors
    /// Returns [`Error::DataLoad`] naming the offending file if any table is
    /// missing, malformed, or lacks an expected column. No partial dataset
    /// is ever returned.
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let dataset = Self {
            customers: read_table(&paths.customers)?,
            orders: read_table(&paths.orders)?,
            order_items: read_table(&paths.order_items)?,
            products: read_table(&paths.products)?,
            category_translations: read_table(&paths.category_translations)?,
            payments: read_table(&paths.payments)?,
        };

        info!(
            "Dataset loaded: {} customers, {} orders, {} order items, {} products, {} category translations, {} payments",
            dataset.customers.len(),
            dataset.orders.len(),
            dataset.order_items.len(),
            dataset.products.len(),
            dataset.category_translations.len(),
            dataset.payments.len(),
        );

        Ok(dataset)
    }

    /// Returns the process-wide dataset, loading it on the first call.
    ///
    /// `paths` are only consulted by the call that performs the load; later
    /// calls return the already-cached handle. The tables are never mutated
    /// after load, so the shared reference is safe to hand to any number of
    /// readers.
    pub fn global(paths: &DatasetPaths) -> Result<&'static Self> {
        DATASET.get_or_try_init(|| Self::load(paths))
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| data_load_error(path, &e))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|e| data_load_error(path, &e))?);
    }
    Ok(rows)
}

fn data_load_error(path: &Path, source: &dyn Display) -> Error {
    Error::DataLoad {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CUSTOMERS_CSV: &str = "\
customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c1,u1,01000,sao paulo,SP
c2,u2,20000,rio de janeiro,RJ
";

    const ORDERS_CSV: &str = "\
order_id,customer_id,order_status,order_purchase_timestamp
o1,c1,delivered,2017-01-05 11:30:00
o2,c2,delivered,2017-02-10 08:15:45
";

    const ORDER_ITEMS_CSV: &str = "\
order_id,order_item_id,product_id,price
o1,1,p1,59.90
o1,2,p2,12.50
o2,1,p1,59.90
";

    const PRODUCTS_CSV: &str = "\
product_id,product_category_name,product_weight_g
p1,beleza_saude,250
p2,,400
";

    const TRANSLATIONS_CSV: &str = "\
product_category_name,product_category_name_english
beleza_saude,health_beauty
";

    const PAYMENTS_CSV: &str = "\
order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,credit_card,3,72.40
o2,1,boleto,1,59.90
";

    /// Writes a complete, valid set of fixture CSVs into a temp directory.
    fn write_fixture_dataset() -> (TempDir, DatasetPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = DatasetPaths::from_dir(dir.path());

        fs::write(&paths.customers, CUSTOMERS_CSV).unwrap();
        fs::write(&paths.orders, ORDERS_CSV).unwrap();
        fs::write(&paths.order_items, ORDER_ITEMS_CSV).unwrap();
        fs::write(&paths.products, PRODUCTS_CSV).unwrap();
        fs::write(&paths.category_translations, TRANSLATIONS_CSV).unwrap();
        fs::write(&paths.payments, PAYMENTS_CSV).unwrap();

        (dir, paths)
    }

    #[test]
    fn test_load_reads_all_six_tables() -> Result<()> {
        let (_dir, paths) = write_fixture_dataset();
        let dataset = Dataset::load(&paths)?;

        assert_eq!(dataset.customers.len(), 2);
        assert_eq!(dataset.orders.len(), 2);
        assert_eq!(dataset.order_items.len(), 3);
        assert_eq!(dataset.products.len(), 2);
        assert_eq!(dataset.category_translations.len(), 1);
        assert_eq!(dataset.payments.len(), 2);

        Ok(())
    }

    #[test]
    fn test_load_types_columns_deterministically() -> Result<()> {
        let (_dir, paths) = write_fixture_dataset();
        let dataset = Dataset::load(&paths)?;

        // Identifiers and codes stay strings
        assert_eq!(dataset.customers[0].customer_state, "SP");
        // Timestamps are parsed at load
        use chrono::Datelike;
        assert_eq!(dataset.orders[0].order_purchase_timestamp.year(), 2017);
        // Sparse category column maps empty to None
        assert_eq!(dataset.products[1].product_category_name, None);
        // Payment values are numeric
        assert!((dataset.payments[0].payment_value - 72.40).abs() < f64::EPSILON);

        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_fatal_and_names_the_file() {
        let (_dir, mut paths) = write_fixture_dataset();
        paths.orders = paths.orders.with_file_name("nonexistent.csv");

        match Dataset::load(&paths) {
            Err(Error::DataLoad { path, .. }) => {
                assert!(path.ends_with("nonexistent.csv"));
            }
            other => panic!("expected DataLoad error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_column_is_fatal() {
        let (_dir, paths) = write_fixture_dataset();
        // Orders table without the timestamp column
        fs::write(&paths.orders, "order_id,customer_id\no1,c1\n").unwrap();

        assert!(matches!(
            Dataset::load(&paths),
            Err(Error::DataLoad { .. })
        ));
    }

    #[test]
    fn test_load_malformed_timestamp_is_fatal() {
        let (_dir, paths) = write_fixture_dataset();
        fs::write(
            &paths.orders,
            "order_id,customer_id,order_purchase_timestamp\no1,c1,not-a-date\n",
        )
        .unwrap();

        assert!(matches!(
            Dataset::load(&paths),
            Err(Error::DataLoad { .. })
        ));
    }

    #[test]
    fn test_global_returns_the_same_handle_without_reloading() -> Result<()> {
        let (_dir, paths) = write_fixture_dataset();

        let first = Dataset::global(&paths)?;
        // Second call must hand back the identical in-memory dataset even if
        // the files have changed on disk in the meantime.
        fs::write(&paths.customers, "customer_id,customer_state,customer_city\n").unwrap();
        let second = Dataset::global(&paths)?;

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.customers.len(), 2);

        Ok(())
    }
}
