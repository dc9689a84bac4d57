use thiserror::Error;

/// Every recoverable failure a lesson, the configuration layer or the CLI can
/// report.
#[derive(Error, Debug)]
pub enum WorkshopError {
    #[error("No value present")]
    NoSuchElement,

    #[error("Cannot increment {0}: unsupported number kind")]
    NumberFormat(String),

    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    #[error("Unknown lesson '{name}' (available: {available})")]
    UnknownLesson { name: String, available: String },

    #[error("Property '{name}' not satisfied: {detail}")]
    PropertyFailed { name: String, detail: String },

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WorkshopError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for WorkshopError {
    fn from(err: serde_json::Error) -> Self {
        WorkshopError::ConfigParse(format!(
            "line {}, column {}: {}",
            err.line(),
            err.column(),
            err
        ))
    }
}

impl From<toml::de::Error> for WorkshopError {
    fn from(err: toml::de::Error) -> Self {
        WorkshopError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WorkshopError>;
