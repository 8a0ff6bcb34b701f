//! Central configuration constants for backend endpoints, limits and defaults.

/// Base URL of the hosted identity REST API.
pub const DEFAULT_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";

/// Default HTTP request timeout for backend calls (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum allowed request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Shortest password the hosted identity service accepts.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Environment variable overriding the backend API key.
pub const ENV_API_KEY: &str = "BUDGET_API_KEY";

/// Environment variable overriding the realtime database URL.
pub const ENV_DATABASE_URL: &str = "BUDGET_DATABASE_URL";

/// Environment variable overriding the identity service base URL.
pub const ENV_AUTH_URL: &str = "BUDGET_AUTH_URL";

/// Convenience function to clamp a timeout value into the allowed range.
pub fn clamp_timeout_secs(v: u64) -> u64 {
    v.clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
}
