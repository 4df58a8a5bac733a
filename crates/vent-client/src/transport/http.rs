//! HTTP transport backed by `reqwest`

use async_trait::async_trait;
use tracing::debug;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::{ClientError, ClientResult};

/// Header carrying the anonymous identity token
pub const IDENTITY_HEADER: &str = "x-anon-id";

/// Transport that sends requests over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport targeting the given API base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Create a transport with a preconfigured `reqwest` client
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = ?request.method, url = %url, "Sending API request");

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        if let Some(identity) = &request.identity {
            builder = builder.header(IDENTITY_HEADER, identity);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let body = if bytes.is_empty() {
            None
        } else {
            Some(
                serde_json::from_slice(&bytes)
                    .map_err(|e| ClientError::Decode(e.to_string()))?,
            )
        };

        Ok(ApiResponse { status, body })
    }
}
