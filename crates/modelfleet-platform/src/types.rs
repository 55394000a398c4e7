//! Domain types for serving endpoints and deployed models

use serde::{Deserialize, Serialize};

/// A serving endpoint snapshot, fetched fresh on every listing call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Full resource path, e.g. `projects/p/locations/r/endpoints/123`.
    pub name: String,

    /// Human-readable endpoint name.
    pub display_name: String,

    /// Models currently deployed to this endpoint.
    pub deployed_models: Vec<DeployedModel>,
}

impl Endpoint {
    /// Endpoint identifier (trailing segment of the resource path).
    pub fn id(&self) -> &str {
        trailing_segment(&self.name)
    }
}

/// A model deployed to an endpoint. The deployment is identified
/// separately from the underlying model resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployedModel {
    /// Deployment identifier, scoped to the owning endpoint.
    pub id: String,

    /// Full resource path of the model artifact,
    /// e.g. `projects/p/locations/r/models/456`.
    pub model: String,

    /// Human-readable model name.
    pub display_name: String,
}

impl DeployedModel {
    /// Model identifier (trailing segment of the model resource path).
    pub fn model_id(&self) -> &str {
        trailing_segment(&self.model)
    }
}

/// Result of probing one region during a sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionActivity {
    /// Region code, e.g. `us-central1`.
    pub region: String,

    /// Number of endpoints discovered in this region.
    pub endpoint_count: usize,

    /// Probe failure reason, if the probe errored or timed out.
    /// A failed probe classifies the region as inactive.
    pub error: Option<String>,
}

impl RegionActivity {
    /// A region is active if the probe found at least one endpoint.
    pub fn is_active(&self) -> bool {
        self.endpoint_count >= 1
    }
}

/// Authentication status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether authentication is valid
    pub authenticated: bool,

    /// Account/user information if available
    pub account_info: Option<String>,

    /// Error message if not authenticated
    pub error: Option<String>,
}

impl AuthStatus {
    pub fn ok(account_info: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            account_info: Some(account_info.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            account_info: None,
            error: Some(error.into()),
        }
    }
}

fn trailing_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
