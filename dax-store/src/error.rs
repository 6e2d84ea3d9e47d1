//! Error types for store operations.

use std::fmt;

/// Errors that can occur when connecting to or talking to the store.
#[derive(Debug)]
pub enum StoreError {
    /// The connection configuration is invalid.
    InvalidConfig(String),
    /// The endpoint could not be reached.
    ConnectionFailed(String),
    /// The store rejected the presented credential.
    AuthenticationFailed(String),
    /// A connect or store operation exceeded its configured deadline.
    /// Carries the name of the operation that timed out.
    Timeout(&'static str),
    /// The backend reported an error.
    Backend(String),
    /// The transport was already released.
    Closed,
}

impl StoreError {
    /// Whether this error is a deadline expiry, so callers can apply
    /// their own retry/backoff policy without matching every variant.
    pub fn is_timeout(&self) -> bool {
        matches!(self, StoreError::Timeout(_))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidConfig(msg) => write!(f, "Invalid store config: {msg}"),
            StoreError::ConnectionFailed(msg) => write!(f, "Store connection failed: {msg}"),
            StoreError::AuthenticationFailed(msg) => {
                write!(f, "Store authentication failed: {msg}")
            }
            StoreError::Timeout(op) => write!(f, "Store operation timed out: {op}"),
            StoreError::Backend(msg) => write!(f, "Store backend error: {msg}"),
            StoreError::Closed => write!(f, "Store connection already closed"),
        }
    }
}

impl std::error::Error for StoreError {}
