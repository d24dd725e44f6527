//! Shared content model and REST gateway for the PeakStart site and back-office.
//!
//! This crate owns everything both the web `client` and the `cli` need to talk
//! to the content API: the entity records, the `{success, data, error, message}`
//! envelope, the endpoint table, the transport seam, and the generic CRUD
//! resource manager that every admin screen is built on.
//!
//! ARCHITECTURE
//! ============
//! - `types` / `envelope` / `endpoints` / `filters` describe the wire.
//! - `transport` is the only place that knows about HTTP; `api::Gateway` maps
//!   logical operations onto it and never panics or throws.
//! - `form` / `resource` / `manager` / `sequence` are the sans-IO admin state
//!   machine; `manager::ResourceSession` drives it against a gateway.
//! - `approval` and `worksite` hold the site-management rules.

pub mod api;
pub mod approval;
pub mod endpoints;
pub mod envelope;
pub mod filters;
pub mod form;
#[cfg(feature = "http")]
pub mod http;
pub mod manager;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod raw;
pub mod resource;
pub mod sequence;
pub mod transport;
pub mod types;
pub mod worksite;

pub use api::Gateway;
pub use envelope::ApiResponse;
pub use form::{FieldKind, FieldSpec, FormError, FormState};
pub use resource::{Editable, Resource};
pub use transport::{HttpReply, HttpRequest, Method, Transport, TransportError};
pub use types::RecordId;
