#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_RESELLERS: &[&str] = &["What Goes Around Comes Around", "Shopbop Archive"];

const DEFAULT_LUXURY_BRANDS: &[&str] = &[
    "Louis Vuitton",
    "Gucci",
    "Chanel",
    "Prada",
    "Hermes",
    "Hermès",
    "Balenciaga",
    "Dior",
    "Fendi",
    "Celine",
    "Céline",
    "Bottega Veneta",
    "Saint Laurent",
    "YSL",
    "Givenchy",
    "Valentino",
    "Burberry",
    "Loewe",
    "Versace",
    "Dolce & Gabbana",
    "Alexander McQueen",
    "Miu Miu",
];

/// Reseller names and the luxury brands searched for in their listings.
/// `luxury_brands` order is the match priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCatalog {
    pub resellers: Vec<String>,
    pub luxury_brands: Vec<String>,
}

impl Default for BrandCatalog {
    fn default() -> Self {
        Self {
            resellers: DEFAULT_RESELLERS.iter().map(|s| s.to_string()).collect(),
            luxury_brands: DEFAULT_LUXURY_BRANDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    Apparel,
    Jewelry,
}

impl PipelineKind {
    pub fn default_input(&self) -> &'static str {
        match self {
            PipelineKind::Apparel => "clothing_shopbop.csv",
            PipelineKind::Jewelry => "jewellery_shopbop.csv",
        }
    }

    pub fn default_output(&self) -> &'static str {
        match self {
            PipelineKind::Apparel => "clothing_shopbop_cleaned.csv",
            PipelineKind::Jewelry => "jewellery_shopbop_cleaned.csv",
        }
    }
}

/// Fully resolved settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub kind: PipelineKind,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub brands: BrandCatalog,
}

impl PipelineSettings {
    /// Built-in file names and brand catalog.
    pub fn defaults(kind: PipelineKind) -> Self {
        Self {
            kind,
            input_path: PathBuf::from(kind.default_input()),
            output_path: PathBuf::from(kind.default_output()),
            brands: BrandCatalog::default(),
        }
    }
}

impl ConfigProvider for PipelineSettings {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn brand_catalog(&self) -> &BrandCatalog {
        &self.brands
    }
}

impl Validate for PipelineSettings {
    fn validate(&self) -> Result<()> {
        let input = self.input_path.to_string_lossy();
        let output = self.output_path.to_string_lossy();
        validate_path("input", &input)?;
        validate_path("output", &output)?;

        if self.input_path == self.output_path {
            return Err(EtlError::InvalidConfigValueError {
                field: "output".to_string(),
                value: output.to_string(),
                reason: "Output file must differ from the input file".to_string(),
            });
        }

        for name in &self.brands.resellers {
            validate_non_empty_string("brands.resellers", name)?;
        }
        for name in &self.brands.luxury_brands {
            validate_non_empty_string("brands.luxury_brands", name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_pipeline() {
        let apparel = PipelineSettings::defaults(PipelineKind::Apparel);
        assert_eq!(apparel.input_path, PathBuf::from("clothing_shopbop.csv"));
        assert_eq!(apparel.output_path, PathBuf::from("clothing_shopbop_cleaned.csv"));

        let jewelry = PipelineSettings::defaults(PipelineKind::Jewelry);
        assert_eq!(jewelry.input_path, PathBuf::from("jewellery_shopbop.csv"));
        assert!(jewelry.validate().is_ok());
    }

    #[test]
    fn test_same_input_and_output_rejected() {
        let mut settings = PipelineSettings::defaults(PipelineKind::Apparel);
        settings.output_path = settings.input_path.clone();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_blank_brand_rejected() {
        let mut settings = PipelineSettings::defaults(PipelineKind::Apparel);
        settings.brands.luxury_brands.push("  ".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_default_catalog_order() {
        let catalog = BrandCatalog::default();
        assert_eq!(catalog.luxury_brands.first().map(String::as_str), Some("Louis Vuitton"));
        assert_eq!(catalog.luxury_brands.len(), 22);
        assert!(catalog.resellers.contains(&"Shopbop Archive".to_string()));
    }
}
