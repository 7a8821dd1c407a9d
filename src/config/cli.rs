use crate::config::toml_config::TomlConfig;
use crate::config::{PipelineKind, PipelineSettings};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Flags shared by both cleaning binaries. Every flag is optional.
#[derive(Debug, Clone, Default, Parser)]
pub struct CliConfig {
    #[arg(long, help = "Raw CSV export to read (defaults to the pipeline's fixed file)")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Cleaned CSV to write (defaults to the pipeline's fixed file)")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "TOML file with [files] and [brands] overrides")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Flags win over the TOML file, which wins over built-in defaults.
    pub fn resolve(&self, kind: PipelineKind) -> Result<PipelineSettings> {
        let mut settings = PipelineSettings::defaults(kind);

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(input) = &self.input {
            settings.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_uses_fixed_names() {
        let cli = CliConfig::try_parse_from(["clean_jewelry"]).unwrap();
        let settings = cli.resolve(PipelineKind::Jewelry).unwrap();
        assert_eq!(settings, PipelineSettings::defaults(PipelineKind::Jewelry));
    }

    #[test]
    fn test_flag_overrides_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[files]\ninput = \"from_toml.csv\"\noutput = \"toml_out.csv\"\n")
            .unwrap();

        let config_path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::try_parse_from([
            "clean_clothing",
            "--config",
            config_path.as_str(),
            "--input",
            "from_flag.csv",
        ])
        .unwrap();

        let settings = cli.resolve(PipelineKind::Apparel).unwrap();
        assert_eq!(settings.input_path, PathBuf::from("from_flag.csv"));
        assert_eq!(settings.output_path, PathBuf::from("toml_out.csv"));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/nonexistent/shopbop.toml")),
            ..Default::default()
        };
        assert!(cli.resolve(PipelineKind::Apparel).is_err());
    }
}
