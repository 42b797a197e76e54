//! Launch data providers
//!
//! The controller talks to the outside world through [`LaunchProvider`].
//! [`HttpLaunchProvider`] is the real implementation: one `POST` of the
//! query body to the configured endpoint per call.

use crate::error::Result;
use crate::http::{decode_json, HttpClient, RequestConfig};
use crate::launch::{LaunchPage, QueryResult};
use crate::pagination::QueryRequest;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Public SpaceX launch query endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.spacexdata.com/v5/launches/query";

/// Source of paged launch data
#[async_trait]
pub trait LaunchProvider: Send + Sync {
    /// Run one query and return the decoded page
    async fn query(&self, request: &QueryRequest) -> Result<QueryResult>;
}

/// Provider backed by the launch query HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpLaunchProvider {
    client: HttpClient,
    endpoint: String,
}

impl HttpLaunchProvider {
    /// Create a provider posting to `endpoint` (absolute, or relative to the
    /// client's base URL)
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Provider for the public endpoint with a default client
    pub fn public() -> Result<Self> {
        Ok(Self::new(HttpClient::new()?, DEFAULT_ENDPOINT))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LaunchProvider for HttpLaunchProvider {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResult> {
        let body = request.to_bytes()?;
        debug!(
            "Querying launches: page={} limit={} offset={}",
            request.options.page(),
            request.options.limit(),
            request.options.offset()
        );

        let response = self
            .client
            .post_with_config(&self.endpoint, RequestConfig::new().json_bytes(body))
            .await?;
        let page: LaunchPage = decode_json(response).await?;
        let result = QueryResult::from(page);

        if !result.is_consistent() {
            warn!(
                "Provider returned inconsistent paging metadata for page {}",
                result.current_page
            );
        }

        Ok(result)
    }
}
