use crate::config::PipelineSettings;
use crate::utils::error::{EtlError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

static ENV_VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Optional overrides read from a TOML file.
///
/// ```toml
/// [files]
/// input = "${DATA_DIR}/clothing_shopbop.csv"
/// output = "clothing_shopbop_cleaned.csv"
///
/// [brands]
/// resellers = ["Shopbop Archive"]
/// luxury_brands = ["Gucci", "Prada"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub files: Option<FilesConfig>,
    pub brands: Option<BrandsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandsConfig {
    pub resellers: Option<Vec<String>>,
    pub luxury_brands: Option<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Overlays the values present in this file onto `settings`.
    pub fn apply_to(&self, settings: &mut PipelineSettings) {
        if let Some(files) = &self.files {
            if let Some(input) = &files.input {
                settings.input_path = input.clone();
            }
            if let Some(output) = &files.output {
                settings.output_path = output.clone();
            }
        }

        if let Some(brands) = &self.brands {
            if let Some(resellers) = &brands.resellers {
                settings.brands.resellers = resellers.clone();
            }
            if let Some(luxury) = &brands.luxury_brands {
                settings.brands.luxury_brands = luxury.clone();
            }
        }
    }
}
