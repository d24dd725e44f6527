//! Gateway construction and task spawning for pages.
//!
//! ERROR HANDLING
//! ==============
//! Gateway calls never fail outright; every outcome is an `ApiResponse`
//! that pages render as data or as an inline banner. Failures are logged
//! to the browser console with the operation that failed.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use content::{ApiResponse, Gateway};

use super::browser::BrowserTransport;

/// API base URL fixed at build time.
pub const API_BASE_URL: &str = match option_env!("PEAKSTART_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

pub type SiteGateway = Gateway<BrowserTransport>;

pub fn gateway() -> SiteGateway {
    Gateway::new(BrowserTransport::new(API_BASE_URL))
}

/// Run a fetch on the browser event loop. Dropped during server rendering.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(task);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(task);
    }
}

/// Log a failed call with the operation label and pass the response through.
pub fn logged<T>(operation: &str, resp: ApiResponse<T>) -> ApiResponse<T> {
    if !resp.success {
        #[cfg(feature = "hydrate")]
        log::warn!("{operation} failed: {}", resp.error_text());
        #[cfg(not(feature = "hydrate"))]
        let _ = operation;
    }
    resp
}
