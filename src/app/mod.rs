pub mod pipelines;

use crate::config::{PipelineKind, PipelineSettings};
use crate::core::etl::{EtlEngine, RunSummary};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use pipelines::{apparel::ApparelTransformer, jewelry::JewelryTransformer};

/// Validates `settings` and runs the pipeline it names.
pub fn run_pipeline(settings: &PipelineSettings) -> Result<RunSummary> {
    settings.validate()?;
    tracing::debug!("Pipeline settings: {:?}", settings);

    match settings.kind {
        PipelineKind::Apparel => {
            let transformer = ApparelTransformer::new(settings.brand_catalog().clone());
            EtlEngine::new(transformer).run_with_config(settings)
        }
        PipelineKind::Jewelry => EtlEngine::new(JewelryTransformer::new()).run_with_config(settings),
    }
}
