use crate::domain::model::NormalizedRecord;

/// A record is kept only when it names a product and links to its page.
pub fn has_required_fields(record: &NormalizedRecord) -> bool {
    !record.product_name.is_empty() && !record.product_page_url.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, url: &str) -> NormalizedRecord {
        NormalizedRecord {
            product_name: name.to_string(),
            product_page_url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_name_and_url() {
        assert!(has_required_fields(&record("Silk Dress", "https://shopbop.com/p/1")));
        assert!(!has_required_fields(&record("", "https://shopbop.com/p/1")));
        assert!(!has_required_fields(&record("Silk Dress", "")));
        assert!(!has_required_fields(&NormalizedRecord::default()));
    }
}
