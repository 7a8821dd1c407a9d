use crate::config::BrandCatalog;

/// Returns the manufacturer for a listing.
///
/// Brands outside the reseller set pass through unchanged. For resellers the
/// product name is scanned for the first luxury brand in catalog order; when
/// nothing matches the reseller name is kept.
pub fn resolve_brand(catalog: &BrandCatalog, raw_brand: &str, product_name: &str) -> String {
    if !catalog.resellers.iter().any(|r| r == raw_brand) {
        return raw_brand.to_string();
    }

    let name = product_name.to_lowercase();
    catalog
        .luxury_brands
        .iter()
        .find(|brand| name.contains(&brand.to_lowercase()))
        .cloned()
        .unwrap_or_else(|| raw_brand.to_string())
}
