//! Back-office screens under `/admin`.
//!
//! ARCHITECTURE
//! ============
//! `layout` guards the subtree and renders the sidebar. `crud` drives a
//! `ResourceManager` signal through the gateway (load, submit, delete) and
//! every screen builds on it: `resource` for the eight content kinds,
//! `submissions` for the contact inbox, `sites` and `site_detail` (with the
//! `workers`, `activities` and `costs` tabs) for site management.

pub mod activities;
pub mod costs;
pub mod crud;
pub mod dashboard;
pub mod layout;
pub mod resource;
pub mod site_detail;
pub mod sites;
pub mod submissions;
pub mod workers;
