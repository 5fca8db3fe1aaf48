use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    /// Missing or malformed command-line inputs
    #[error("{0}")]
    Usage(String),

    #[error("Error decoding assets JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid manifest '{path}': {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid regex pattern built from the asset prefix
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
