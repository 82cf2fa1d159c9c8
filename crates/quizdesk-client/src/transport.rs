//! Transport client bound to one API base address.
//!
//! The [`Transport`] port carries a request to the API and hands back the
//! status plus whatever JSON body came with it. Interpreting the envelope is
//! left to the action layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

/// HTTP verbs used by the resource actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// A request relative to the transport's base address.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Verb to send.
    pub method: Method,
    /// Absolute path such as `/quizzes/{id}`.
    pub path: String,
    /// JSON body for `POST` and `PUT`.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// A bodiless request.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and decoded body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body parsed as JSON, or `None` when empty or not JSON.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failures that prevented a response from arriving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The base address could not be parsed.
    #[error("invalid base url '{url}': {message}")]
    InvalidBaseUrl {
        /// The rejected address.
        url: String,
        /// Parser detail.
        message: String,
    },
    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {message}")]
    Build {
        /// Builder detail.
        message: String,
    },
    /// The request timed out.
    #[error("request timed out: {message}")]
    Timeout {
        /// Client detail.
        message: String,
    },
    /// Connection, protocol or body read failure.
    #[error("network error: {message}")]
    Network {
        /// Client detail.
        message: String,
    },
}

/// Port for sending API requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Reqwest-backed transport with a fixed base address and timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidBaseUrl`] when `base_url` does not
    /// parse and [`TransportError::Build`] when the client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let parsed = Url::parse(base_url).map_err(|err| TransportError::InvalidBaseUrl {
            url: base_url.to_owned(),
            message: err.to_string(),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::Build {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// The normalised base address, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), self.url_for(&request.path))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(ApiResponse {
            status,
            body: serde_json::from_slice(&bytes).ok(),
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout {
            message: error.to_string(),
        }
    } else {
        TransportError::Network {
            message: error.to_string(),
        }
    }
}
