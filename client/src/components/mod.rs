//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Site chrome (`navbar`, `footer`, `admin_sidebar`) wraps every route. The
//! schema-driven `resource_form` and `resource_table` render any
//! `content::Editable` kind, so each admin screen is configuration rather
//! than a copy of the same list/form markup.

pub mod admin_sidebar;
pub mod date_filter;
pub mod footer;
pub mod modal;
pub mod navbar;
pub mod notice;
pub mod resource_form;
pub mod resource_table;
