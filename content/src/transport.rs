//! HTTP seam between the gateway and the network.
//!
//! The browser, the CLI, and the in-memory test backend each provide a
//! [`Transport`]. Implementations only move bytes; envelope interpretation
//! lives in [`crate::api`].

use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A request against a path relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status code plus the parsed JSON body (`None` when the body was not JSON).
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("{0}")]
    Request(String),
    /// No transport exists in this build target.
    #[error("{0} is unavailable in this build")]
    Unavailable(&'static str),
}

/// Sends one request and returns the raw reply.
///
/// Futures are `?Send` so the browser transport can hold JS handles.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        (**self).send(request).await
    }
}
