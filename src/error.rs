//! Error types and handling for UserHub CLI
//!
//! Provides structured error types for all CLI operations with proper context
//! and error chains for debugging. Errors are never recovered or retried
//! inside the library; every failure surfaces to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for UserHub CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error types for UserHub CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    // ═══════════════════════════════════════════════════════════════
    // Network & HTTP Errors
    // ═══════════════════════════════════════════════════════════════
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Failed to connect to the UserHub server
    #[error("Failed to connect to {host}: {reason}")]
    Connection {
        /// Server that could not be reached
        host: String,
        /// Transport-level failure description
        reason: String,
    },

    /// Error response from the server
    #[error("UserHub API error: {status} - {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Invalid API response format
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    // ═══════════════════════════════════════════════════════════════
    // Configuration Errors
    // ═══════════════════════════════════════════════════════════════
    /// Failed to read configuration file
    #[error("Failed to read config from {path}: {reason}")]
    ConfigRead {
        /// Path of the config file
        path: PathBuf,
        /// Read failure description
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file not found
    #[error("Configuration not found. Pass --api-url or create a config file")]
    NoConfig,

    /// Failed to write configuration file
    #[error("Failed to write config to {path}: {reason}")]
    ConfigWrite {
        /// Path of the config file
        path: PathBuf,
        /// Write failure description
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════
    // Serialization & Encoding Errors
    // ═══════════════════════════════════════════════════════════════
    /// Failed to serialize data
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Failed to deserialize data
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    // ═══════════════════════════════════════════════════════════════
    // Validation & Input Errors
    // ═══════════════════════════════════════════════════════════════
    /// Invalid input argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ═══════════════════════════════════════════════════════════════
    // Other Errors
    // ═══════════════════════════════════════════════════════════════
    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::Connection { .. } | Self::Http(_) => 4,
            Self::Api { .. } => 5,
            Self::InvalidResponse(_) | Self::Serialization(_) | Self::Deserialization(_) => 6,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connection {
                host: err
                    .url()
                    .map_or_else(|| "<unknown>".to_string(), ToString::to_string),
                reason: err.to_string(),
            }
        } else if err.is_decode() {
            Self::Deserialization(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() {
            Self::InvalidResponse(format!("JSON syntax error: {err}"))
        } else {
            Self::Deserialization(err.to_string())
        }
    }
}
