//! `gloo-net` transport for the browser build.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request fails with `Unavailable`; pages only
//! fetch from the browser.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use async_trait::async_trait;
use content::transport::{HttpReply, HttpRequest, Transport, TransportError};

#[derive(Clone, Debug)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use content::transport::Method;
            use gloo_net::http::Request;

            let url = format!("{}{}", self.base_url, request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            }
            .query(query_pairs(&request));
            let sent = match request.body {
                Some(body) => builder.json(&body).map_err(|e| TransportError::Request(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp.json::<serde_json::Value>().await.ok();
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &self.base_url);
            Err(TransportError::Unavailable("browser HTTP"))
        }
    }
}

/// Query pairs as borrowed text; `URLSearchParams` does the encoding.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn query_pairs(request: &HttpRequest) -> impl Iterator<Item = (&str, &str)> {
    request.query.iter().map(|(key, value)| (key.as_str(), value.as_str()))
}
