//! Domain Errors
//!
//! Remote failures, storage failures and configuration failures are kept
//! apart: each is handled at a different boundary.

use thiserror::Error;

/// Failures talking to the remote catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Non-success response other than 404
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),
    /// The requested id or name does not exist upstream
    #[error("{0} not found")]
    NotFound(String),
    /// A response arrived but its body was not what we expected
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Everything except `NotFound` is a transport-level failure
    pub fn is_transport(&self) -> bool {
        !matches!(self, CatalogError::NotFound(_))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures reading or writing persisted favorites
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Stored favorites are corrupt: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Failed to encode favorites: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Invalid configuration input
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
