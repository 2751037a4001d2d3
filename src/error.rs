//! Error types for ingestion, storage and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised around the extraction core.
///
/// Parsing and extraction themselves never fail; these cover reading
/// files, the record store and configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the upload size limit
    #[error("{} is {size} bytes, limit is {limit} bytes", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// File content is not valid UTF-8 text
    #[error("{} is not a valid text or email file", .path.display())]
    Decode { path: PathBuf },

    /// Required input field is empty
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Stored records could not be (de)serialized
    #[error("Invalid record store: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for email-digest operations
pub type Result<T> = std::result::Result<T, Error>;
