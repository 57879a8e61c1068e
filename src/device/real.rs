//! HTTP transport backed by `reqwest`.

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, trace};

use super::Transport;
use crate::error::{Result, WledError};

/// Transport for a device reachable over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url`.
    ///
    /// A bare host such as `wled.local` is treated as `http://wled.local`;
    /// trailing slashes are dropped.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .user_agent(concat!("wled-panel/", env!("CARGO_PKG_VERSION")))
            .build()?;
        debug!(%base_url, "Created HTTP transport");
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn exchange(&self, request: RequestBuilder, url: String) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WledError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        trace!(%url, bytes = body.len(), "Received response");
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!(%url, "GET");
        self.exchange(self.client.get(&url), url).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url(path);
        debug!(%url, "POST");
        trace!(%body, "Request body");
        self.exchange(self.client.post(&url).json(body), url).await
    }
}

fn normalize_base_url(input: &str) -> Result<String> {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(WledError::InvalidArgument(
            "device URL must not be empty".to_string(),
        ));
    }
    if trimmed.contains("://") {
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(WledError::InvalidArgument(format!(
                "unsupported URL scheme in '{trimmed}'"
            )));
        }
        Ok(trimmed.to_string())
    } else {
        Ok(format!("http://{trimmed}"))
    }
}
