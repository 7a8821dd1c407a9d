use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EtlError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::CsvError(e) => match e.kind() {
                csv::ErrorKind::Io(io) => format!("Could not read or write a CSV file: {}", io),
                _ => format!("The CSV file could not be parsed: {}", e),
            },
            EtlError::IoError(e) => format!("File access failed: {}", e),
            EtlError::ConfigValidationError { field, message } => {
                format!("Configuration '{}' is invalid: {}", field, message)
            }
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::CsvError(_) | EtlError::IoError(_) => {
                "Check that the input file exists, is readable, and the output directory is writable"
            }
            EtlError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            EtlError::InvalidConfigValueError { .. } => {
                "Fix the reported setting via the command line or the TOML configuration"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
