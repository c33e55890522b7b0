//! Default configuration values

/// Default UserHub server URL
pub fn default_api_url() -> String {
    "http://localhost:9000".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Connect timeout in seconds, separate from the overall request timeout
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
