//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for DuoSync
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DuoSyncError {
    /// Upstream payload no longer matches the shape we validate against.
    #[error("API response does not conform to the expected schema: {0}")]
    SchemaMismatch(String),

    /// A fetched day has no prior capture time/streak to attach.
    #[error("No recorded capture metadata for date {0}")]
    UnresolvedDate(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// The remote asked for a captcha; log in again with another user agent.
    #[error("Captcha required: {0}")]
    Captcha(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DuoSyncError {
    /// Shorthand for building a [`DuoSyncError::SchemaMismatch`] that names
    /// the offending path.
    pub fn schema(path: impl AsRef<str>, problem: impl AsRef<str>) -> Self {
        Self::SchemaMismatch(format!("{}: {}", path.as_ref(), problem.as_ref()))
    }

    /// True when the failure came from the upstream payload shape rather
    /// than from transport or authentication.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::SchemaMismatch(_))
    }
}

/// Result type alias for DuoSync operations
pub type Result<T> = std::result::Result<T, DuoSyncError>;
