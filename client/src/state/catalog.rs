//! Filtered public listings (blog, portfolio).
//!
//! The page keeps the filter in one signal and the [`Listing`] in another.
//! Every filter change issues a new fetch; a response is only applied if it
//! belongs to the latest fetch, so typing quickly in the blog search never
//! leaves older results on screen.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use content::ApiResponse;
use content::manager::ListStatus;
use content::sequence::{RequestSequence, Ticket};
use content::types::ALL;

#[derive(Clone, Debug, PartialEq)]
pub struct Listing<R> {
    pub records: Vec<R>,
    pub status: ListStatus,
    sequence: RequestSequence,
}

impl<R> Default for Listing<R> {
    fn default() -> Self {
        Self { records: Vec::new(), status: ListStatus::Idle, sequence: RequestSequence::new() }
    }
}

impl<R> Listing<R> {
    pub fn begin(&mut self) -> Ticket {
        self.status = ListStatus::Loading;
        self.sequence.issue()
    }

    /// Apply a response unless a newer fetch has started. Returns whether it applied.
    pub fn finish(&mut self, ticket: Ticket, resp: ApiResponse<Vec<R>>) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        if resp.success {
            self.records = resp.data.unwrap_or_default();
            self.status = ListStatus::Loaded;
        } else {
            self.records.clear();
            self.status = ListStatus::Failed(resp.error_text());
        }
        true
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Failed(text) => Some(text),
            _ => None,
        }
    }
}

/// Blog category options with `All` first.
pub fn category_options(categories: &[String]) -> Vec<String> {
    std::iter::once(ALL.to_owned()).chain(categories.iter().cloned()).collect()
}
