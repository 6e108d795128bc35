//! Board Errors
//!
//! Failures from configuration loading and from the persistence boundary.

use serde::{Deserialize, Serialize};

/// Common result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// A failed read against the persistence service.
///
/// A fetch either yields the complete row set or one of these; there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    /// The scoped query could not be constructed
    InvalidQuery(String),
    /// No backend URL/key was provided at startup
    NotConfigured,
    /// The request never produced a response (network, CORS, aborted)
    Transport(String),
    /// The service answered with a non-success status
    Remote { status: u16, message: String },
    /// The response body was not a list of the expected records
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::InvalidQuery(msg) => write!(f, "Invalid query: {}", msg),
            FetchError::NotConfigured => write!(f, "Backend is not configured"),
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Remote { status, message } => write!(f, "Remote error ({}): {}", status, message),
            FetchError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Configuration errors raised while assembling [`crate::BoardConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting was absent or blank
    Missing(String),
    /// A setting was present but unusable
    Invalid { key: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "Missing setting: {}", key),
            ConfigError::Invalid { key, reason } => write!(f, "Invalid setting {}: {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}
