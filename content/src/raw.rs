//! Path-addressed client for screens that build API paths themselves.
//!
//! Paths are relative to `/api` (`"sites/3"` and `"/sites/3"` both address
//! `/api/sites/3`). Responses decode into any type; use `serde_json::Value`
//! for the raw envelope data.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::exchange;
use crate::envelope::ApiResponse;
use crate::filters::Query;
use crate::transport::{HttpRequest, Method, Transport};

pub struct RawClient<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> RawClient<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn get<D: DeserializeOwned>(&self, path: &str, query: &Query) -> ApiResponse<D> {
        let request = HttpRequest::new(Method::Get, api_path(path)).with_query(query.pairs().to_vec());
        exchange(self.transport, request).await
    }

    pub async fn post<D: DeserializeOwned>(&self, path: &str, body: Value) -> ApiResponse<D> {
        exchange(self.transport, HttpRequest::new(Method::Post, api_path(path)).with_body(body)).await
    }

    pub async fn put<D: DeserializeOwned>(&self, path: &str, body: Value) -> ApiResponse<D> {
        exchange(self.transport, HttpRequest::new(Method::Put, api_path(path)).with_body(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResponse<Value> {
        exchange(self.transport, HttpRequest::new(Method::Delete, api_path(path))).await
    }
}

#[must_use]
pub fn api_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_prefix("api/").unwrap_or(trimmed);
    format!("/api/{trimmed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_anchored_under_api() {
        assert_eq!(api_path("sites/3"), "/api/sites/3");
        assert_eq!(api_path("/sites/3"), "/api/sites/3");
        assert_eq!(api_path("/api/costs"), "/api/costs");
    }
}
