use crate::domain::model::{NormalizedRecord, RawRecord, RETAILER};
use crate::domain::ports::RowTransformer;
use crate::domain::services::{
    clean_color, extract_jewelry_prices, first_image, truncate_chars, FieldChain,
};

const PAGE_URL: FieldChain = FieldChain(&["item_page_link", "url_1"]);
const NAME: FieldChain = FieldChain(&["name", "title", "name_2"]);
const BRAND: FieldChain = FieldChain(&["name_1", "data"]);
const PRICE: FieldChain = FieldChain(&["price"]);
const SALE_PRICE: FieldChain = FieldChain(&["lowPrice", "price_1"]);
const COLOR: FieldChain = FieldChain(&["product_color"]);
const IMAGE: FieldChain = FieldChain(&["image", "image_2"]);
const SIZE: FieldChain = FieldChain(&["product_size", "product_sizes"]);
const PRODUCT_DESCRIPTION: FieldChain = FieldChain(&["Product_Description"]);
const BRAND_DESCRIPTION: FieldChain = FieldChain(&["Brand_Description"]);

/// Brand blurbs can run long; only they are cut.
const BRAND_DESCRIPTION_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, Default)]
pub struct JewelryTransformer;

impl JewelryTransformer {
    pub fn new() -> Self {
        Self
    }

    fn description(raw: &RawRecord) -> String {
        let product = PRODUCT_DESCRIPTION.resolve(raw);
        if !product.is_empty() {
            return product;
        }
        truncate_chars(&BRAND_DESCRIPTION.resolve(raw), BRAND_DESCRIPTION_MAX_CHARS)
    }
}

impl RowTransformer for JewelryTransformer {
    fn transform(&self, raw: &RawRecord) -> NormalizedRecord {
        let prices = extract_jewelry_prices(&PRICE.resolve(raw), &SALE_PRICE.resolve(raw));

        NormalizedRecord {
            product_page_url: PAGE_URL.resolve(raw),
            product_name: NAME.resolve(raw),
            brand_name: BRAND.resolve(raw),
            retailer: RETAILER.to_string(),
            product_description: Self::description(raw),
            color: clean_color(&COLOR.resolve(raw)),
            original_price: prices.original,
            sale_price: prices.sale,
            product_image_url: first_image(&IMAGE.resolve(raw)),
            size_availability: SIZE.resolve(raw),
        }
    }
}
