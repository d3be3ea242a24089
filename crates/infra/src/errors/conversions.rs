//! Conversions from external infrastructure errors into domain errors.

use duosync_domain::DuoSyncError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DuoSyncError);

impl From<InfraError> for DuoSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DuoSyncError> for InfraError {
    fn from(value: DuoSyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDuoSyncError {
    fn into_duosync(self) -> DuoSyncError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → DuoSyncError */
/* -------------------------------------------------------------------------- */

impl IntoDuoSyncError for SqlError {
    fn into_duosync(self) -> DuoSyncError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => DuoSyncError::Storage("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        DuoSyncError::Storage("database is locked".into())
                    }
                    ErrorCode::NotADatabase => {
                        DuoSyncError::Storage("file is not a SQLite database".into())
                    }
                    ErrorCode::ReadOnly => DuoSyncError::Storage("database is read-only".into()),
                    _ => DuoSyncError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => DuoSyncError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                DuoSyncError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, name, ty) => {
                DuoSyncError::Storage(format!("invalid column type for {name}: {ty}"))
            }
            RE::InvalidPath(path) => DuoSyncError::Storage(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => DuoSyncError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_duosync())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → DuoSyncError */
/* -------------------------------------------------------------------------- */

impl IntoDuoSyncError for r2d2::Error {
    fn into_duosync(self) -> DuoSyncError {
        DuoSyncError::Storage(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_duosync())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DuoSyncError */
/* -------------------------------------------------------------------------- */

impl IntoDuoSyncError for HttpError {
    fn into_duosync(self) -> DuoSyncError {
        if self.is_timeout() {
            return DuoSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DuoSyncError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return DuoSyncError::SchemaMismatch(format!("$: response body is not valid: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => DuoSyncError::Auth(message),
                404 => DuoSyncError::NotFound(message),
                429 => DuoSyncError::RateLimited(message),
                400..=499 => DuoSyncError::InvalidInput(message),
                _ => DuoSyncError::Network(message),
            };
        }

        if self.is_builder() {
            return DuoSyncError::Config(format!("invalid HTTP request: {self}"));
        }

        DuoSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_duosync())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io / serde_json / toml → DuoSyncError */
/* -------------------------------------------------------------------------- */

impl IntoDuoSyncError for std::io::Error {
    fn into_duosync(self) -> DuoSyncError {
        DuoSyncError::Storage(format!("I/O error ({:?}): {self}", self.kind()))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_duosync())
    }
}

impl IntoDuoSyncError for serde_json::Error {
    fn into_duosync(self) -> DuoSyncError {
        DuoSyncError::Storage(format!(
            "invalid JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_duosync())
    }
}

impl IntoDuoSyncError for url::ParseError {
    fn into_duosync(self) -> DuoSyncError {
        DuoSyncError::Config(format!("invalid URL: {self}"))
    }
}

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(value.into_duosync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
