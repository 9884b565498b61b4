//! Product record - catalog data for one product.

use serde::{Deserialize, Serialize};

/// One row of the products table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub product_id: String,
    /// Category name in the local language; absent for a small share of the
    /// catalog, which surfaces as a null category after joins
    pub product_category_name: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_empty_category_field_maps_to_none() {
        let data = "product_id,product_category_name,product_weight_g\n\
                    p1,beleza_saude,250\n\
                    p2,,400\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let products: Vec<Product> = reader
            .deserialize()
            .collect::<Result<_, csv::Error>>()
            .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_category_name.as_deref(), Some("beleza_saude"));
        assert_eq!(products[1].product_category_name, None);
    }
}
