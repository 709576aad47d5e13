use thiserror::Error;

/// Main error type for the tailwind-config crate
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read config file {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Unsupported config file format: {path}. Use .yaml, .yml, or .json")]
    UnsupportedFormat { path: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
