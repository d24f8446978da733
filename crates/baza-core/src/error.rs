use thiserror::Error;

/// Top-level error type for the BAZA assistant.
///
/// Only the edges of the system can fail: reading and parsing configuration
/// or catalog files, and serializing transcripts. Matching and conversation
/// bookkeeping have no error path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BazaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for BazaError {
    fn from(err: toml::de::Error) -> Self {
        BazaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for BazaError {
    fn from(err: toml::ser::Error) -> Self {
        BazaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BazaError {
    fn from(err: serde_json::Error) -> Self {
        BazaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for BAZA operations.
pub type Result<T> = std::result::Result<T, BazaError>;
