//! Contact submissions inbox: list, detail modal, delete.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use content::manager::ResourceManager;
use content::types::{ContactSubmission, RecordId};
use content::ApiResponse;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionsState {
    pub list: ResourceManager<ContactSubmission>,
    pub selected: Option<RecordId>,
}

impl Default for SubmissionsState {
    fn default() -> Self {
        Self { list: ResourceManager::new(), selected: None }
    }
}

impl SubmissionsState {
    pub fn open(&mut self, id: RecordId) {
        if self.list.record(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected_record(&self) -> Option<&ContactSubmission> {
        self.selected.and_then(|id| self.list.record(id))
    }

    /// Fold a delete response in. Returns `true` when the open submission was
    /// the one deleted and the modal closed.
    pub fn apply_delete(&mut self, id: RecordId, resp: &ApiResponse<Value>) -> bool {
        if !self.list.finish_delete(id, resp) {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
            return true;
        }
        false
    }
}

/// Status badge text; missing status reads as `new`.
pub fn status_label(submission: &ContactSubmission) -> &str {
    submission.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("new")
}
