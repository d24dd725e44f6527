//! Networking for the content REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` adapts `gloo-net` to the shared `content::Transport` seam and
//! `api` hands pages a ready gateway plus the task spawner they run it on.

pub mod api;
pub mod browser;
