//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clocks,
//! dialogs) from page and component logic so state modules stay testable
//! off the browser.

pub mod confirm;
pub mod icons;
pub mod markdown;
pub mod route;
pub mod storage;
pub mod time;
