//! gcloud CLI wrapper
//!
//! Token acquisition goes through the installed gcloud CLI so the
//! tool never handles long-lived credentials itself.

use crate::error::{Result, VertexError};
use std::process::Stdio;
use tokio::process::Command;

/// gcloud CLI wrapper for credential access
pub struct GcloudAuth;

impl GcloudAuth {
    pub fn new() -> Self {
        Self
    }

    /// Fetch a short-lived access token for the active gcloud account.
    pub async fn access_token(&self) -> Result<String> {
        // Check if gcloud exists
        let which = Command::new("which").arg("gcloud").output().await?;

        if !which.status.success() {
            return Err(VertexError::GcloudNotFound);
        }

        let token = run_gcloud(&["auth", "print-access-token"]).await?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(VertexError::AuthenticationFailed(
                "gcloud returned an empty access token; run `gcloud auth login`".to_string(),
            ));
        }
        Ok(token)
    }

    /// The active gcloud account, if one is configured.
    pub async fn account(&self) -> Result<Option<String>> {
        let output = run_gcloud(&["config", "get-value", "account"]).await?;
        let account = output.trim();
        if account.is_empty() || account == "(unset)" {
            Ok(None)
        } else {
            Ok(Some(account.to_string()))
        }
    }
}

impl Default for GcloudAuth {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a gcloud command and return stdout
async fn run_gcloud(args: &[&str]) -> Result<String> {
    let mut cmd = Command::new("gcloud");
    cmd.args(args);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Running: gcloud {}", args.join(" "));

    let output = cmd.output().await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VertexError::CommandFailed(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
