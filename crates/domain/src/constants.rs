//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Persisted entry formats (chrono strftime syntax)
pub const DATE_KEY_FORMAT: &str = "%Y/%m/%d";
pub const CAPTURE_TIME_FORMAT: &str = "%H:%M:%S";

// Remote API
pub const DEFAULT_BASE_URL: &str = "https://www.duolingo.com";
pub const LOGIN_PATH: &str = "/login";
pub const USERS_PATH: &str = "/users";
pub const XP_SUMMARIES_API_VERSION: &str = "2017-06-30";
pub const XP_SUMMARIES_START_DATE: &str = "1970-01-01";
pub const JWT_HEADER: &str = "jwt";
pub const CAPTCHA_MARKER_KEY: &str = "blockScript";
pub const LOGIN_FAILURE_KEY: &str = "failure";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/103.0.0.0 Safari/537.36";

// HTTP defaults
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
