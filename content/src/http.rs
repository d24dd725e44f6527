//! Native HTTP transport built on `reqwest`.

use async_trait::async_trait;
use serde_json::Value;

use crate::transport::{HttpReply, HttpRequest, Method, Transport, TransportError};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), client: reqwest::Client::new() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, url).query(&request.query);
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }
        let response = builder.send().await.map_err(|err| TransportError::Request(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        Ok(HttpReply { status, body })
    }
}
