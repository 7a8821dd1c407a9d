pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::app::pipelines::{apparel::ApparelTransformer, jewelry::JewelryTransformer};
pub use crate::config::{BrandCatalog, PipelineKind, PipelineSettings};
pub use crate::core::etl::{EtlEngine, RunSummary};
pub use crate::domain::model::{NormalizedRecord, RawRecord, OUTPUT_HEADERS, RETAILER};
pub use crate::utils::error::{EtlError, Result};
