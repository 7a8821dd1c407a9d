pub mod brand;
pub mod fields;
pub mod price;

pub use brand::resolve_brand;
pub use fields::{clean_color, first_image, truncate_chars, FieldChain};
pub use price::{extract_apparel_prices, extract_jewelry_prices, PricePair};
