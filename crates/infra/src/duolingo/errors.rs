//! Duolingo API error types
//!
//! Names what went wrong with a request before it is folded into the domain
//! error. Retrying is the HTTP client's job and happens before any of these
//! are built.

use duosync_domain::DuoSyncError;
use thiserror::Error;

/// Duolingo API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Captcha required: {0}")]
    Captcha(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    /// Transport failure already mapped by the HTTP layer
    #[error(transparent)]
    Transport(DuoSyncError),
}

impl From<DuoSyncError> for ApiError {
    fn from(err: DuoSyncError) -> Self {
        Self::Transport(err)
    }
}

impl From<ApiError> for DuoSyncError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized(message) | ApiError::LoginFailed(message) => {
                DuoSyncError::Auth(message)
            }
            ApiError::Captcha(message) => DuoSyncError::Captcha(message),
            ApiError::NotFound(message) => DuoSyncError::NotFound(message),
            ApiError::RateLimit(message) => DuoSyncError::RateLimited(message),
            ApiError::Server(message) => DuoSyncError::Network(message),
            ApiError::Client(message) => DuoSyncError::InvalidInput(message),
            ApiError::Transport(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_mapping() {
        assert_eq!(
            DuoSyncError::from(ApiError::LoginFailed("bad password".into())),
            DuoSyncError::Auth("bad password".into())
        );
        assert_eq!(
            DuoSyncError::from(ApiError::Captcha("blocked".into())),
            DuoSyncError::Captcha("blocked".into())
        );
        assert_eq!(
            DuoSyncError::from(ApiError::RateLimit("HTTP 429".into())),
            DuoSyncError::RateLimited("HTTP 429".into())
        );
        assert_eq!(
            DuoSyncError::from(ApiError::Server("HTTP 502".into())),
            DuoSyncError::Network("HTTP 502".into())
        );
        let schema = DuoSyncError::schema("$", "not JSON");
        assert_eq!(DuoSyncError::from(ApiError::from(schema.clone())), schema);
    }
}
