//! Microlearn - Terminal client for the Microlearn course platform
//!
//! This library provides the core functionality for the Microlearn client:
//! the platform API (auth, profiles, course suggestions), the adaptive quiz
//! API, session token storage, and the terminal user interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod quiz;
pub mod session;
pub mod tui;

#[cfg(test)]
mod tests;

/// Result type alias for Microlearn operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Microlearn operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network transport error (connection refused, timeout, DNS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP response; the message is the server-provided
    /// `message`/`error` field, or `HTTP <status>` when the body has neither
    #[error("{message}")]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// Human-readable error message extracted from the response body
        message: String,
    },

    /// Session token storage error
    #[error("Session error: {0}")]
    Session(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialize the Microlearn library with logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
