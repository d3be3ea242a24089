//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `DUOSYNC_USERNAME` is set, loads from environment variables only;
//!    any missing or invalid value is an error
//! 2. Otherwise falls back to a config file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the result is checked with [`Config::validate`].
//!
//! ## Environment Variables
//! - `DUOSYNC_USERNAME` (required): account username
//! - `DUOSYNC_PASSWORD`: account password
//! - `DUOSYNC_JWT`: stored token, preferred over the password
//! - `DUOSYNC_STORE_PATH` (required): history file or database path
//! - `DUOSYNC_STORE_BACKEND`: `json` (default) or `sqlite`
//! - `DUOSYNC_BASE_URL`: API base URL
//! - `DUOSYNC_USER_AGENT`: User-Agent header
//! - `DUOSYNC_HTTP_TIMEOUT`: request timeout in seconds
//! - `DUOSYNC_HTTP_MAX_ATTEMPTS`: attempts per request, including the first
//!
//! ## File Locations
//! The loader probes the following names, in order, in the current working
//! directory, its parent, its grandparent and the executable's directory:
//! `duosync.json`, `duosync.toml`, `config.json`, `config.toml`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use duosync_domain::{
    AccountConfig, Config, DuoSyncError, HttpConfig, Result, StoreBackend, StoreConfig,
};

/// Presence of this variable selects the environment as the config source.
const ENV_SELECTOR: &str = "DUOSYNC_USERNAME";

const CONFIG_FILE_NAMES: [&str; 4] = ["duosync.json", "duosync.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `DuoSyncError::Config` if the environment configures an account
/// but is incomplete or invalid, or if no valid config file is found.
pub fn load() -> Result<Config> {
    if env_opt(ENV_SELECTOR).is_none() {
        tracing::debug!("{ENV_SELECTOR} not set, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `DuoSyncError::Config` if a required variable is missing or a
/// value does not parse.
pub fn load_from_env() -> Result<Config> {
    let username = env_var(ENV_SELECTOR)?;
    let store_path = env_var("DUOSYNC_STORE_PATH")?;

    let defaults = HttpConfig::default();
    let config = Config {
        account: AccountConfig {
            username,
            password: env_opt("DUOSYNC_PASSWORD"),
            jwt: env_opt("DUOSYNC_JWT"),
        },
        http: HttpConfig {
            base_url: env_opt("DUOSYNC_BASE_URL").unwrap_or(defaults.base_url),
            user_agent: env_opt("DUOSYNC_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_seconds: env_parse("DUOSYNC_HTTP_TIMEOUT")?.unwrap_or(defaults.timeout_seconds),
            max_attempts: env_parse("DUOSYNC_HTTP_MAX_ATTEMPTS")?.unwrap_or(defaults.max_attempts),
        },
        store: StoreConfig {
            backend: env_parse::<StoreBackend>("DUOSYNC_STORE_BACKEND")?.unwrap_or_default(),
            path: store_path,
        },
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// file extension.
///
/// # Errors
/// Returns `DuoSyncError::Config` if the file is missing, unreadable,
/// malformed, or fails validation.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(DuoSyncError::Config(format!("Config file not found: {}", p.display())));
        }
        None => probe_config_paths().ok_or_else(|| {
            DuoSyncError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DuoSyncError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DuoSyncError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DuoSyncError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DuoSyncError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    first_existing(&roots)
}

fn first_existing(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|candidate| candidate.is_file())
}

fn env_var(key: &str) -> Result<String> {
    env_opt(key)
        .ok_or_else(|| DuoSyncError::Config(format!("Missing required environment variable: {key}")))
}

/// Set and non-empty
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| DuoSyncError::Config(format!("Invalid {key}: {e}")))
        })
        .transpose()
}
