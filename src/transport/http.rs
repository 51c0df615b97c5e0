use crate::error::MountainHubError;
use crate::transport::{Transport, ACCEPT_VERSION, ACCEPT_VERSION_HEADER, TIMELINE_URL};
use crate::types::query_params::QueryParams;
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::Value;

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    url: String,
    client: Client,
}

impl HttpTransport {
    /// Transport for the public MountainHub timeline endpoint.
    pub fn new() -> Result<Self, MountainHubError> {
        Self::with_base_url(TIMELINE_URL)
    }

    /// Transport for a timeline endpoint served from somewhere else.
    pub fn with_base_url(url: impl Into<String>) -> Result<Self, MountainHubError> {
        let client = Client::builder()
            .build()
            .map_err(MountainHubError::ClientBuild)?;
        Ok(Self::with_client(url, client))
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn get_timeline(&self, params: &QueryParams) -> Result<Value, MountainHubError> {
        debug!("Requesting {} with parameters {:?}", self.url, params.to_pairs());

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT_VERSION_HEADER, ACCEPT_VERSION)
            .query(&params.to_pairs())
            .send()
            .map_err(|e| MountainHubError::Request {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response
            .json::<Value>()
            .map_err(|e| MountainHubError::Request {
                url: self.url.clone(),
                source: e,
            })?;
        info!("Received timeline response from {} ({})", self.url, status);
        Ok(body)
    }
}
