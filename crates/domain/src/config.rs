//! Configuration structures
//!
//! Loaded by `duosync-infra::config` from the environment or a JSON/TOML file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::errors::{DuoSyncError, Result};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub account: AccountConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub store: StoreConfig,
}

impl Config {
    /// Check cross-field requirements serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.account.username.trim().is_empty() {
            return Err(DuoSyncError::Config("account.username must not be empty".into()));
        }
        let present =
            |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        if !present(&self.account.password) && !present(&self.account.jwt) {
            return Err(DuoSyncError::Config(
                "either account.password or account.jwt must be set".into(),
            ));
        }
        if self.store.path.trim().is_empty() {
            return Err(DuoSyncError::Config("store.path must not be empty".into()));
        }
        if self.http.max_attempts == 0 {
            return Err(DuoSyncError::Config("http.max_attempts must be at least 1".into()));
        }
        Ok(())
    }
}

/// Remote account credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub username: String,
    /// Superseded by `jwt` when both are present.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub jwt: Option<String>,
}

impl fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("AccountConfig")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("jwt", &redact(&self.jwt))
            .finish()
    }
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Initial try plus retries
    pub max_attempts: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
        }
    }
}

/// Where the reconciled history lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    pub path: String,
}

/// Persistence backend for the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Json,
    Sqlite,
}

crate::impl_label_conversions!(StoreBackend {
    Json => "json",
    Sqlite => "sqlite",
});
