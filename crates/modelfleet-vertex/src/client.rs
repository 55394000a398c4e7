//! Vertex AI REST client
//!
//! Direct Vertex AI API implementation over the regional
//! `{region}-aiplatform.googleapis.com` hosts, using a Bearer token
//! from the gcloud CLI. Mutations return Google long-running
//! operations, which are polled until done under a bounded wait.

use crate::auth::GcloudAuth;
use crate::error::{Result, VertexError};
use async_trait::async_trait;
use modelfleet_platform::{AuthStatus, DeployedModel, Endpoint, InferencePlatform};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Timing policy for API calls and operation completion waits.
#[derive(Debug, Clone)]
pub struct VertexTimeouts {
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,

    /// Bounded wait for a long-running operation to report done.
    pub operation_timeout: Duration,

    /// Interval between operation status polls.
    pub poll_interval: Duration,
}

impl Default for VertexTimeouts {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            operation_timeout: Duration::from_secs(300),
            poll_interval: Duration::from_secs(5),
        }
    }
}

/// Vertex AI platform client
pub struct VertexClient {
    http: reqwest::Client,
    project: String,
    token: String,
    timeouts: VertexTimeouts,
}

impl VertexClient {
    /// Build a client for the given project, fetching an access token
    /// through the gcloud CLI.
    pub async fn connect(project: impl Into<String>, timeouts: VertexTimeouts) -> Result<Self> {
        let token = GcloudAuth::new().access_token().await?;
        let http = reqwest::Client::builder()
            .timeout(timeouts.request_timeout)
            .build()?;

        Ok(Self {
            http,
            project: project.into(),
            token,
            timeouts,
        })
    }

    fn base_url(region: &str) -> String {
        format!("https://{region}-aiplatform.googleapis.com/v1")
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).bearer_auth(&self.token).send().await?;
        decode(response).await
    }

    /// Fetch one page of the endpoint listing. The page token goes
    /// through `query` so reserved characters are percent-encoded.
    async fn endpoints_page(
        &self,
        url: &str,
        page_token: Option<&str>,
    ) -> Result<ListEndpointsResponse> {
        let mut request = self.http.get(url).bearer_auth(&self.token);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }
        decode(request.send().await?).await
    }

    /// Poll a long-running operation until it reports done, failing if
    /// the operation itself failed or the bounded wait elapses.
    async fn wait_for_operation(&self, region: &str, mut operation: Operation) -> Result<()> {
        let deadline = tokio::time::Instant::now() + self.timeouts.operation_timeout;

        loop {
            if operation.done {
                return match operation.error {
                    Some(status) => Err(VertexError::OperationFailed(format!(
                        "{} (code {})",
                        status.message, status.code
                    ))),
                    None => Ok(()),
                };
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(VertexError::OperationTimeout(operation.name));
            }

            tokio::time::sleep(self.timeouts.poll_interval).await;

            let url = format!("{}/{}", Self::base_url(region), operation.name);
            tracing::debug!("Polling operation {}", operation.name);
            operation = self.get_json(&url).await?;
        }
    }
}

#[async_trait]
impl InferencePlatform for VertexClient {
    fn project(&self) -> &str {
        &self.project
    }

    async fn check_auth(&self) -> modelfleet_platform::Result<AuthStatus> {
        match GcloudAuth::new().account().await {
            Ok(Some(account)) => Ok(AuthStatus::ok(account)),
            Ok(None) => Ok(AuthStatus::failed(
                "no active gcloud account; run `gcloud auth login`",
            )),
            Err(e) => Ok(AuthStatus::failed(e.to_string())),
        }
    }

    async fn list_endpoints(&self, region: &str) -> modelfleet_platform::Result<Vec<Endpoint>> {
        let base = format!(
            "{}/projects/{}/locations/{}/endpoints",
            Self::base_url(region),
            self.project,
            region
        );

        let endpoints = collect_endpoint_pages(|page_token| {
            let base = base.clone();
            async move { self.endpoints_page(&base, page_token.as_deref()).await }
        })
        .await?;

        Ok(endpoints)
    }

    async fn undeploy_model(
        &self,
        region: &str,
        endpoint_name: &str,
        deployed_model_id: &str,
    ) -> modelfleet_platform::Result<()> {
        let url = format!("{}/{}:undeployModel", Self::base_url(region), endpoint_name);
        let body = UndeployModelRequest {
            deployed_model_id: deployed_model_id.to_string(),
        };

        tracing::info!("Undeploying {} from {}", deployed_model_id, endpoint_name);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(VertexError::from)?;

        let operation: Operation = decode(response).await?;
        self.wait_for_operation(region, operation).await?;
        Ok(())
    }

    async fn delete_model(
        &self,
        region: &str,
        model_name: &str,
    ) -> modelfleet_platform::Result<()> {
        let url = format!("{}/{}", Self::base_url(region), model_name);

        tracing::info!("Deleting model {}", model_name);
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(VertexError::from)?;

        let operation: Operation = decode(response).await?;
        self.wait_for_operation(region, operation).await?;
        Ok(())
    }
}

/// Walk an endpoint listing page by page, following `nextPageToken`
/// until a page carries no (or an empty) token.
async fn collect_endpoint_pages<F, Fut>(mut fetch: F) -> Result<Vec<Endpoint>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListEndpointsResponse>>,
{
    let mut endpoints = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = fetch(page_token.take()).await?;
        endpoints.extend(page.endpoints.into_iter().map(Endpoint::from));

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    Ok(endpoints)
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_response(status, &body))
}

/// Map an HTTP failure onto the platform error classes using Google's
/// error envelope when one is present.
fn classify_response(status: reqwest::StatusCode, body: &str) -> VertexError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error)
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"));

    match status.as_u16() {
        404 => VertexError::NotFound(message),
        403 => VertexError::PermissionDenied(message),
        401 => VertexError::AuthenticationFailed(message),
        _ => VertexError::Api(message),
    }
}

// ============ API Types ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListEndpointsResponse {
    #[serde(default)]
    endpoints: Vec<ApiEndpoint>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEndpoint {
    name: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    deployed_models: Vec<ApiDeployedModel>,
}

impl From<ApiEndpoint> for Endpoint {
    fn from(e: ApiEndpoint) -> Self {
        Endpoint {
            name: e.name,
            display_name: e.display_name,
            deployed_models: e
                .deployed_models
                .into_iter()
                .map(|d| DeployedModel {
                    id: d.id,
                    model: d.model,
                    display_name: d.display_name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiDeployedModel {
    id: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    display_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UndeployModelRequest {
    deployed_model_id: String,
}

#[derive(Debug, Deserialize)]
struct Operation {
    name: String,
    #[serde(default)]
    done: bool,
    error: Option<OperationStatus>,
}

#[derive(Debug, Deserialize)]
struct OperationStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}
