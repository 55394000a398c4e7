//! Inference platform trait definition

use crate::error::Result;
use crate::types::{AuthStatus, Endpoint};
use async_trait::async_trait;

/// Inference platform abstraction trait
///
/// Concrete platform clients (Vertex AI today) implement this trait to
/// give the CLI a single interface for discovery and mutation. The
/// platform itself holds the only authoritative state; every read
/// re-queries it.
#[async_trait]
pub trait InferencePlatform: Send + Sync {
    /// Returns the cloud project this client is scoped to
    fn project(&self) -> &str;

    /// Check if the client is properly configured and authenticated
    async fn check_auth(&self) -> Result<AuthStatus>;

    /// List all serving endpoints in a region, with their deployed
    /// models. Fetched fresh on every call, never cached.
    async fn list_endpoints(&self, region: &str) -> Result<Vec<Endpoint>>;

    /// Detach a deployed model from an endpoint, leaving the model
    /// artifact in place. Blocks until the platform reports the
    /// operation complete or the client's operation bound elapses.
    async fn undeploy_model(
        &self,
        region: &str,
        endpoint_name: &str,
        deployed_model_id: &str,
    ) -> Result<()>;

    /// Permanently remove a model artifact from the project. Returns
    /// `PlatformError::NotFound` if the model does not exist; blocking
    /// semantics match [`undeploy_model`](Self::undeploy_model).
    async fn delete_model(&self, region: &str, model_name: &str) -> Result<()>;
}
