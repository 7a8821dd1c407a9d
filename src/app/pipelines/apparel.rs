use crate::config::BrandCatalog;
use crate::domain::model::{NormalizedRecord, RawRecord, RETAILER};
use crate::domain::ports::RowTransformer;
use crate::domain::services::{extract_apparel_prices, resolve_brand, FieldChain};

const PAGE_URL: FieldChain = FieldChain(&["item_page_link"]);
const PAGE_TITLE: FieldChain = FieldChain(&["item_page_title"]);
const PRICE: FieldChain = FieldChain(&["price"]);
const BRAND: FieldChain = FieldChain(&["data_1", "data"]);
const NAME: FieldChain = FieldChain(&["data_2", "data2"]);
const COLOR: FieldChain = FieldChain(&["Product_Color"]);
const IMAGE: FieldChain = FieldChain(&["image_1", "image"]);
const SIZE: FieldChain = FieldChain(&["Product_Size"]);

/// Clothing export transformer. Reseller brands are re-derived from the
/// product name using the injected catalog.
#[derive(Debug, Clone, Default)]
pub struct ApparelTransformer {
    brands: BrandCatalog,
}

impl ApparelTransformer {
    pub fn new(brands: BrandCatalog) -> Self {
        Self { brands }
    }
}

impl RowTransformer for ApparelTransformer {
    fn transform(&self, raw: &RawRecord) -> NormalizedRecord {
        let prices = extract_apparel_prices(&PRICE.resolve(raw), &PAGE_TITLE.resolve(raw));
        let product_name = NAME.resolve(raw);
        let brand = resolve_brand(&self.brands, &BRAND.resolve(raw), &product_name);
        let description = format!("{} {}", brand, product_name).trim().to_string();

        NormalizedRecord {
            product_page_url: PAGE_URL.resolve(raw),
            product_name,
            brand_name: brand,
            retailer: RETAILER.to_string(),
            product_description: description,
            color: COLOR.resolve(raw),
            original_price: prices.original,
            sale_price: prices.sale,
            product_image_url: IMAGE.resolve(raw),
            size_availability: SIZE.resolve(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRecord {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_full_row() {
        let raw = row(&[
            ("item_page_link", "https://shopbop.com/p/1"),
            ("item_page_title", "Previous Price $415.00 Sale Price $207.50"),
            ("price", "$207.50"),
            ("data_1", "Shopbop Archive"),
            ("data_2", "Gucci Marmont Bag"),
            ("Product_Color", "Black"),
            ("image", "https://img/1.jpg"),
            ("Product_Size", "One Size"),
        ]);

        let record = ApparelTransformer::default().transform(&raw);
        assert_eq!(record.product_page_url, "https://shopbop.com/p/1");
        assert_eq!(record.product_name, "Gucci Marmont Bag");
        assert_eq!(record.brand_name, "Gucci");
        assert_eq!(record.retailer, "Shopbop");
        assert_eq!(record.product_description, "Gucci Gucci Marmont Bag");
        assert_eq!(record.color, "Black");
        assert_eq!(record.original_price, "€415.00");
        assert_eq!(record.sale_price, "€207.50");
        assert_eq!(record.product_image_url, "https://img/1.jpg");
        assert_eq!(record.size_availability, "One Size");
    }

    #[test]
    fn test_fallback_columns() {
        let raw = row(&[("data", "Staud"), ("data2", "Tommy Bag"), ("price", "€95.00")]);
        let record = ApparelTransformer::default().transform(&raw);

        assert_eq!(record.brand_name, "Staud");
        assert_eq!(record.product_name, "Tommy Bag");
        assert_eq!(record.original_price, "€95.00");
        assert_eq!(record.sale_price, "");
    }

    #[test]
    fn test_empty_row_yields_empty_fields() {
        let record = ApparelTransformer::default().transform(&RawRecord::new());
        assert_eq!(
            record,
            NormalizedRecord {
                retailer: "Shopbop".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_description_trims_missing_brand() {
        let raw = row(&[("data_2", "Linen Shirt")]);
        let record = ApparelTransformer::default().transform(&raw);
        assert_eq!(record.product_description, "Linen Shirt");
    }
}
