use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Retailer written into every normalized row.
pub const RETAILER: &str = "Shopbop";

/// Output header, in column order.
pub const OUTPUT_HEADERS: [&str; 10] = [
    "Product page URL",
    "Product name",
    "Brand name",
    "Retailer",
    "Product description",
    "Color",
    "Original price",
    "Sale price",
    "Product image URL",
    "Size availability",
];

/// One input row keyed by its source column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub data: HashMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent columns read as an empty string.
    pub fn get(&self, column: &str) -> &str {
        self.data.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.data.insert(column.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A row in the fixed catalog schema. Field order matches `OUTPUT_HEADERS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "Product page URL")]
    pub product_page_url: String,
    #[serde(rename = "Product name")]
    pub product_name: String,
    #[serde(rename = "Brand name")]
    pub brand_name: String,
    #[serde(rename = "Retailer")]
    pub retailer: String,
    #[serde(rename = "Product description")]
    pub product_description: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Original price")]
    pub original_price: String,
    #[serde(rename = "Sale price")]
    pub sale_price: String,
    #[serde(rename = "Product image URL")]
    pub product_image_url: String,
    #[serde(rename = "Size availability")]
    pub size_availability: String,
}
