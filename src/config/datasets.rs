//! Dataset path configuration.
//!
//! The six source CSVs live under a single data directory and keep the
//! canonical export file names. Only the directory is configurable.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default directory holding the source CSV files
pub const DEFAULT_DATA_DIR: &str = "data";

const CUSTOMERS_FILE: &str = "customers_dataset.csv";
const ORDERS_FILE: &str = "orders_dataset.csv";
const ORDER_ITEMS_FILE: &str = "order_items_dataset.csv";
const PRODUCTS_FILE: &str = "products_dataset.csv";
const CATEGORY_TRANSLATION_FILE: &str = "product_category_name_translation.csv";
const PAYMENTS_FILE: &str = "order_payments_dataset.csv";

/// `[data]` section of the config file
#[derive(Debug, Default, Deserialize)]
pub struct DataConfig {
    /// Directory holding the CSV exports; defaults to `data`
    pub dir: Option<String>,
}

/// Resolved locations of the six source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Customers table
    pub customers: PathBuf,
    /// Orders table
    pub orders: PathBuf,
    /// Order items table
    pub order_items: PathBuf,
    /// Products table
    pub products: PathBuf,
    /// Category translation table
    pub category_translations: PathBuf,
    /// Payments table
    pub payments: PathBuf,
}

impl DatasetPaths {
    /// Builds the six canonical file paths under `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            customers: dir.join(CUSTOMERS_FILE),
            orders: dir.join(ORDERS_FILE),
            order_items: dir.join(ORDER_ITEMS_FILE),
            products: dir.join(PRODUCTS_FILE),
            category_translations: dir.join(CATEGORY_TRANSLATION_FILE),
            payments: dir.join(PAYMENTS_FILE),
        }
    }
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self::from_dir(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_joins_canonical_file_names() {
        let paths = DatasetPaths::from_dir("somewhere");
        assert_eq!(paths.orders, PathBuf::from("somewhere/orders_dataset.csv"));
        assert_eq!(
            paths.category_translations,
            PathBuf::from("somewhere/product_category_name_translation.csv")
        );
    }

    #[test]
    fn test_default_uses_data_dir() {
        let paths = DatasetPaths::default();
        assert_eq!(paths.customers, PathBuf::from("data/customers_dataset.csv"));
    }
}
