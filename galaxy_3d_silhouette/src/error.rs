//! Error types for the Galaxy3D silhouette pass
//!
//! This module defines the error types returned by the silhouette renderer,
//! its configuration, and the external services it drives.

use std::fmt;

/// Result type for silhouette operations
pub type Result<T> = std::result::Result<T, Error>;

/// Silhouette pass errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Internal bookkeeping broke (e.g. a sweep event closed an occluder that was never opened)
    InvariantViolation(String),

    /// Operation called out of the expected frame order
    InvalidState(String),

    /// Rejected configuration value
    InvalidConfig(String),

    /// Failure reported by an external service (debug draw, collector, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
