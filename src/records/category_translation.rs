//! Category translation record - local category name to English.
//!
//! A 1:1 lookup table. All user-facing category filters use the English
//! name; a product whose local category has no row here ends up with a null
//! English category after joins.

use serde::{Deserialize, Serialize};

/// One row of the category translation table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTranslation {
    /// Category name in the local language
    pub product_category_name: String,
    /// Category name in English
    pub product_category_name_english: String,
}
