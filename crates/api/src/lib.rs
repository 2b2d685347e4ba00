pub mod credential;
pub mod endpoints;
pub mod error;
pub mod headers;
pub mod models;

pub use credential::EncodedCredential;
pub use endpoints::Endpoints;
pub use error::{ApiError, Result};
pub use headers::set_common_headers;
pub use models::{FieldUpdate, Issue, IssueResponse};

use reqwest::{Client, Method, Request, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Stateless Jira REST client. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct JiraClient {
    client: Client,
    base_url: Url,
    endpoints: Endpoints,
}

impl JiraClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            client: build_http_client(DEFAULT_TIMEOUT)?,
            base_url: endpoints::parse_base_url(base_url.as_ref())?,
            endpoints: Endpoints::default(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = build_http_client(timeout)?;
        Ok(self)
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Run the issue search and return the issues in server order together
    /// with the response status.
    pub async fn fetch_issues(
        &self,
        credential: &EncodedCredential,
    ) -> Result<(Vec<Issue>, StatusCode)> {
        let url = self.endpoints.search_url(&self.base_url)?;
        let request = Request::new(Method::GET, url);

        let response = self.send(request, credential).await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;

        let envelope: IssueResponse = serde_json::from_slice(&bytes).map_err(|e| {
            error!(status = status.as_u16(), "Failed to parse JSON response: {}", e);
            ApiError::Decode(e)
        })?;

        debug!(count = envelope.issues.len(), "Fetched issues");
        Ok((envelope.issues, status))
    }

    /// Set one custom field on one issue. Success carries no body, only the
    /// status (normally 204).
    pub async fn update_custom_field<V: Serialize + ?Sized>(
        &self,
        issue_key: &str,
        field_id: &str,
        value: &V,
        credential: &EncodedCredential,
    ) -> Result<StatusCode> {
        if issue_key.is_empty() {
            return Err(ApiError::EmptyArgument("issue key"));
        }
        if field_id.is_empty() {
            return Err(ApiError::EmptyArgument("field id"));
        }

        let body = serde_json::to_vec(&FieldUpdate::new(field_id, value))
            .map_err(ApiError::Encode)?;

        let url = self.endpoints.issue_url(&self.base_url, issue_key)?;
        let mut request = Request::new(Method::PUT, url);
        *request.body_mut() = Some(body.into());

        let response = self.send(request, credential).await?;
        debug!(issue = issue_key, field = field_id, "Updated custom field");
        Ok(response.status())
    }

    /// Attach headers, send, and turn any non-2xx response into
    /// [`ApiError::Http`].
    async fn send(&self, mut request: Request, credential: &EncodedCredential) -> Result<Response> {
        set_common_headers(&mut request, credential);

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(method = %method, url = %url, "Sending request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        debug!(method = %method, url = %url, status = status.as_u16(), "Received response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.map_err(ApiError::Transport)?;
        warn!(method = %method, url = %url, status = status.as_u16(), "Request failed");
        Err(ApiError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(format!("jira-fields/{}", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(ApiError::Transport)
}

/// One-shot issue search against `base_url` with a default client.
pub async fn fetch_issues(
    credential: &EncodedCredential,
    base_url: &str,
) -> Result<(Vec<Issue>, StatusCode)> {
    JiraClient::new(base_url)?.fetch_issues(credential).await
}

/// One-shot custom field update against `base_url` with a default client.
pub async fn update_custom_field<V: Serialize + ?Sized>(
    issue_key: &str,
    field_id: &str,
    value: &V,
    credential: &EncodedCredential,
    base_url: &str,
) -> Result<StatusCode> {
    JiraClient::new(base_url)?
        .update_custom_field(issue_key, field_id, value, credential)
        .await
}
