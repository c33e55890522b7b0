//! HTTP client abstraction for the UserHub API
//!
//! Provides a generic JSON-over-HTTP client plus the users facade built on
//! top of it. The server address is injected at construction, so tests can
//! point a client at a local mock server.

pub mod http;
pub mod users;

pub use http::ApiClient;
pub use users::UsersClient;
