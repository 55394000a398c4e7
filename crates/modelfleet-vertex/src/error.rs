//! Vertex AI client error types

use modelfleet_platform::PlatformError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VertexError {
    #[error("gcloud not found. Please install the Google Cloud SDK: https://cloud.google.com/sdk/docs/install")]
    GcloudNotFound,

    #[error("gcloud command failed: {0}")]
    CommandFailed(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Vertex AI API error: {0}")]
    Api(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Operation did not complete in time: {0}")]
    OperationTimeout(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<VertexError> for PlatformError {
    fn from(e: VertexError) -> Self {
        match e {
            VertexError::GcloudNotFound => {
                PlatformError::AuthenticationFailed("gcloud CLI not found".to_string())
            }
            VertexError::CommandFailed(m) => PlatformError::AuthenticationFailed(m),
            VertexError::AuthenticationFailed(m) => PlatformError::AuthenticationFailed(m),
            VertexError::NotFound(m) => PlatformError::NotFound(m),
            VertexError::PermissionDenied(m) => PlatformError::PermissionDenied(m),
            VertexError::Api(m) => PlatformError::Api(m),
            VertexError::OperationFailed(m) => PlatformError::Api(m),
            VertexError::OperationTimeout(m) => PlatformError::Timeout(m),
            VertexError::Http(e) => PlatformError::Transport(e.to_string()),
            VertexError::Json(e) => PlatformError::Json(e),
            VertexError::Io(e) => PlatformError::Io(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, VertexError>;
