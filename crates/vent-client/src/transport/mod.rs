//! Request transport abstraction
//!
//! The client issues [`ApiRequest`]s through a [`Transport`] so the HTTP
//! machinery can be swapped for a mock in tests.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

use crate::error::ClientResult;

/// HTTP method for an API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request ready to be sent to the server
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path with query string, relative to the API base URL
    pub path: String,
    /// Anonymous identity token, sent as the identifying header when present
    pub identity: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            identity: None,
            body: None,
        }
    }

    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A raw response from the server
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends API requests and returns raw responses
///
/// Transport errors (connection refused, timeouts) come back as
/// `ClientError::Transport`; any HTTP response, including error statuses, is
/// returned as an [`ApiResponse`] for the client to interpret.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}
