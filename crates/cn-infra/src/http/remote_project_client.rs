use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use cn_core::config::AppConfig;
use cn_core::ids::ProjectId;
use cn_core::ports::{RemoteProjectError, RemoteProjectPort};
use cn_core::project::{RemoteProjectRecord, StatusCountSummary, StatusFilter};

use super::dto::{counts_from_wire, ProjectListDto};

/// Longest slice of an error body kept in [`RemoteProjectError::Unexpected`].
const MAX_ERROR_BODY: usize = 256;

/// [`RemoteProjectPort`] backed by the maker project REST API.
pub struct HttpRemoteProjectClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpRemoteProjectClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        auth_token: Option<String>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("project API base URL is not configured");
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("build HTTP client failed")?;

        Ok(Self {
            client,
            base_url,
            auth_token: auth_token.filter(|token| !token.is_empty()),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let timeout =
            (config.request_timeout_secs > 0).then(|| Duration::from_secs(config.request_timeout_secs));
        Self::new(&config.api_base_url, timeout, config.auth_token.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/maker/projects{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, RemoteProjectError> {
        let response = builder.send().await.map_err(map_transport)?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Project API responded");

        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(RemoteProjectError::NotFound);
        }

        let body = response.text().await.unwrap_or_default();
        Err(RemoteProjectError::Unexpected {
            status: status.as_u16(),
            message: truncate(body.trim(), MAX_ERROR_BODY),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RemoteProjectError> {
        let bytes = response.bytes().await.map_err(map_transport)?;
        serde_json::from_slice(&bytes).map_err(|e| RemoteProjectError::Decode(e.to_string()))
    }

    async fn post_command(&self, id: &ProjectId, action: &str) -> Result<(), RemoteProjectError> {
        let url = self.url(&format!("/{}/{}", id, action));
        self.send(self.request(Method::POST, url)).await?;
        Ok(())
    }
}

fn map_transport(error: reqwest::Error) -> RemoteProjectError {
    if error.is_decode() {
        RemoteProjectError::Decode(error.to_string())
    } else {
        RemoteProjectError::Network(error.to_string())
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}…", &text[..end]),
        None => text.to_string(),
    }
}

#[async_trait]
impl RemoteProjectPort for HttpRemoteProjectClient {
    #[tracing::instrument(name = "http.get_status_counts", skip(self))]
    async fn get_status_counts(&self) -> Result<StatusCountSummary, RemoteProjectError> {
        let response = self
            .send(self.request(Method::GET, self.url("/status-counts")))
            .await?;
        let raw: HashMap<String, u64> = Self::decode(response).await?;
        Ok(counts_from_wire(raw))
    }

    #[tracing::instrument(name = "http.get_projects_by_filter", skip(self))]
    async fn get_projects_by_filter(
        &self,
        filter: StatusFilter,
    ) -> Result<Vec<RemoteProjectRecord>, RemoteProjectError> {
        let mut query = Vec::new();
        if let Some(lifecycle) = filter.lifecycle {
            query.push(("lifecycle", lifecycle.as_wire()));
        }
        if let Some(review) = filter.review {
            query.push(("review", review.as_wire()));
        }

        let builder = self.request(Method::GET, self.url("")).query(&query);
        let response = self.send(builder).await?;
        let list: ProjectListDto = Self::decode(response).await?;
        Ok(list.into_records())
    }

    #[tracing::instrument(name = "http.delete_project", skip(self), fields(project_id = %id))]
    async fn delete_project(&self, id: &ProjectId) -> Result<(), RemoteProjectError> {
        let url = self.url(&format!("/{}", id));
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    #[tracing::instrument(name = "http.cancel_review_request", skip(self), fields(project_id = %id))]
    async fn cancel_review_request(&self, id: &ProjectId) -> Result<(), RemoteProjectError> {
        self.post_command(id, "review/cancel").await
    }

    #[tracing::instrument(name = "http.cancel_scheduled_release", skip(self), fields(project_id = %id))]
    async fn cancel_scheduled_release(&self, id: &ProjectId) -> Result<(), RemoteProjectError> {
        self.post_command(id, "schedule/cancel").await
    }
}
