//! Platform error types

use thiserror::Error;

/// Errors surfaced by inference platform clients.
///
/// Every API failure is classified into one of these variants so that
/// callers can branch on the class (not-found, permission, transient)
/// instead of parsing provider-specific messages.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlatformError {
    /// The target resource does not exist on the platform.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Network-level or deadline failure; the request may succeed on a
    /// later run without any operator action.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;
