#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! # UserHub CLI
//!
//! A command-line client for managing users in a UserHub directory server.
//!
//! ## Architecture
//!
//! This library is organized into several key modules:
//!
//! - **[`error`]** - Error types and error handling
//! - **[`config`]** - Configuration management
//! - **[`client`]** - HTTP client and the users API facade
//! - **[`cli`]** - Command-line argument parsing
//!
//! ## Quick Start
//!
//! ```bash
//! userhub list                 # Show all users
//! userhub add --name "Ada Lovelace" --email ada@example.com --age 36
//! userhub remove 42            # Delete a user (asks for confirmation)
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;

/// Error type alias for convenience
pub use error::{CliError, Result};

/// Configuration type alias for convenience
pub use config::Config;

/// Users API client re-export for convenience
pub use client::users::UsersClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "userhub";
