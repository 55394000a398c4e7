//! Undeploy/delete removal workflow
//!
//! Two sequential phases per confirmed selection: detach the deployed
//! model from its endpoint, then (if the operator opted in) delete the
//! underlying model artifact after a settle delay. Undeploy failure
//! aborts the whole sequence; a missing model at delete time counts as
//! already done.

use crate::client::InferencePlatform;
use crate::error::PlatformError;
use std::time::Duration;
use thiserror::Error;

/// A confirmed removal selection.
#[derive(Debug, Clone)]
pub struct RemovalRequest {
    /// Region hosting the endpoint.
    pub region: String,

    /// Full resource path of the endpoint.
    pub endpoint_name: String,

    /// Deployment identifier to detach from the endpoint.
    pub deployed_model_id: String,

    /// Full resource path of the model artifact.
    pub model_name: String,

    /// Whether to delete the model artifact after undeploying.
    pub delete_model: bool,
}

/// Timing policy for the removal sequence.
#[derive(Debug, Clone)]
pub struct RemovalPolicy {
    /// Wait inserted after a successful undeploy and before any delete
    /// attempt, to let the platform's internal state propagate.
    pub settle_delay: Duration,
}

impl Default for RemovalPolicy {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_secs(30),
        }
    }
}

/// How the optional delete phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The platform deleted the model artifact.
    Deleted,

    /// The model was already gone; treated as success (idempotent).
    AlreadyGone,
}

/// Result of a completed removal sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalOutcome {
    /// The deployed model was detached from its endpoint.
    pub undeployed: bool,

    /// Delete phase result; `None` when the operator opted out.
    pub delete: Option<DeleteOutcome>,
}

/// Removal sequence errors. The `Delete` variant means the undeploy
/// already succeeded, so the run ended in partial success.
#[derive(Error, Debug)]
pub enum RemovalError {
    #[error("Undeploy failed: {0}")]
    Undeploy(#[source] PlatformError),

    #[error("Model undeployed, but delete failed: {0}")]
    Delete(#[source] PlatformError),
}

/// Execute the removal sequence against the platform.
///
/// Phases run strictly in order: undeploy, settle delay, optional
/// delete. Any undeploy failure short-circuits the sequence and the
/// delete phase is never attempted. `NotFound` from the delete phase
/// maps to [`DeleteOutcome::AlreadyGone`]; any other delete failure is
/// surfaced as [`RemovalError::Delete`]. No phase retries
/// automatically; recovery is a re-run of the tool.
pub async fn execute_removal(
    platform: &dyn InferencePlatform,
    request: &RemovalRequest,
    policy: &RemovalPolicy,
) -> Result<RemovalOutcome, RemovalError> {
    platform
        .undeploy_model(
            &request.region,
            &request.endpoint_name,
            &request.deployed_model_id,
        )
        .await
        .map_err(RemovalError::Undeploy)?;
    tracing::info!(
        "Undeployed {} from {}",
        request.deployed_model_id,
        request.endpoint_name
    );

    if !request.delete_model {
        return Ok(RemovalOutcome {
            undeployed: true,
            delete: None,
        });
    }

    if !policy.settle_delay.is_zero() {
        tracing::debug!("Settling for {:?} before delete", policy.settle_delay);
        tokio::time::sleep(policy.settle_delay).await;
    }

    match platform
        .delete_model(&request.region, &request.model_name)
        .await
    {
        Ok(()) => {
            tracing::info!("Deleted model {}", request.model_name);
            Ok(RemovalOutcome {
                undeployed: true,
                delete: Some(DeleteOutcome::Deleted),
            })
        }
        Err(e) if e.is_not_found() => {
            tracing::debug!("Model {} already gone, nothing to delete", request.model_name);
            Ok(RemovalOutcome {
                undeployed: true,
                delete: Some(DeleteOutcome::AlreadyGone),
            })
        }
        Err(e) => Err(RemovalError::Delete(e)),
    }
}
