use crate::config::BrandCatalog;
use crate::domain::model::{NormalizedRecord, RawRecord};
use std::path::Path;

/// Maps one raw row to one catalog row. Implementations are pure.
pub trait RowTransformer {
    fn transform(&self, raw: &RawRecord) -> NormalizedRecord;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn brand_catalog(&self) -> &BrandCatalog;
}
