//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen concern (`auth`, `catalog`, `contact`, etc.) as
//! plain structs wrapped in `RwSignal`s by the pages. The transitions live
//! here, free of Leptos, so they are unit-testable.

pub mod auth;
pub mod catalog;
pub mod contact;
pub mod dashboard;
pub mod submissions;
pub mod worksite;
