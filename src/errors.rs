use thiserror::Error;

/// Error type for everything outside the pure domain commands: configuration
/// files and serialization.
#[derive(Debug, Error)]
pub enum SchoolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SchoolError>;
