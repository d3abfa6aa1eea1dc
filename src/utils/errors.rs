use thiserror::Error;

/// Main error type for acli
#[derive(Error, Debug)]
pub enum AcliError {
    #[error("This command can only be run inside of an Acquia Remote IDE")]
    EnvironmentMismatch,

    #[error("Not found in API spec: {0}")]
    NotFound(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
