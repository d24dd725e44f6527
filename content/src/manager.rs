//! Generic list/create/edit/delete state for one admin view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin screen owns one list of records and one form. The screen is
//! either creating (no editing id) or editing an existing record. The list is
//! always re-fetched from the server after a successful mutation; local
//! state is never patched.
//!
//! DESIGN
//! ======
//! [`ResourceManager`] is sans-IO: `begin_*`/`prepare_*` decide what request
//! to make and `finish_*` fold the response back in. The web admin drives it
//! from signals; [`ResourceSession`] drives it directly against a gateway for
//! the CLI and tests.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use serde_json::Value;

use crate::api::Gateway;
use crate::envelope::ApiResponse;
use crate::filters::Query;
use crate::form::{self, FormError, FormState};
use crate::resource::Editable;
use crate::sequence::{RequestSequence, Ticket};
use crate::transport::Transport;
use crate::types::RecordId;

/// Banner text when an update is submitted without a selected record.
pub const NO_SELECTION: &str = "No record selected for update.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Creating,
    Editing(RecordId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

/// The request a submit turned into.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<D> {
    Create(D),
    Update(RecordId, D),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceManager<R: Editable> {
    records: Vec<R>,
    status: ListStatus,
    form: FormState,
    defaults: FormState,
    mode: Mode,
    notice: Option<Notice>,
    sequence: RequestSequence,
    submitting: bool,
}

impl<R: Editable> Default for ResourceManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Editable> ResourceManager<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            status: ListStatus::Idle,
            form: R::blank_form(),
            defaults: FormState::new(),
            mode: Mode::Creating,
            notice: None,
            sequence: RequestSequence::new(),
            submitting: false,
        }
    }

    /// Values every fresh create form starts with, such as the owning site id.
    #[must_use]
    pub fn with_defaults(mut self, defaults: FormState) -> Self {
        self.defaults = defaults;
        self.form = self.fresh_form();
        self
    }

    /// Change one default; applied to the form immediately when creating.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if self.mode == Mode::Creating {
            self.form.set(key, value.clone());
        }
        self.defaults.set(key, value);
    }

    fn fresh_form(&self) -> FormState {
        let mut form = R::blank_form();
        for (key, value) in self.defaults.iter() {
            form.set(key, value);
        }
        form
    }

    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<RecordId> {
        match self.mode {
            Mode::Editing(id) => Some(id),
            Mode::Creating => None,
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // =========================================================================
    // LIST
    // =========================================================================

    pub fn begin_load(&mut self) -> Ticket {
        self.status = ListStatus::Loading;
        self.sequence.issue()
    }

    /// Apply a list response. Returns `false` when a newer load superseded it.
    pub fn finish_load(&mut self, ticket: Ticket, resp: ApiResponse<Vec<R>>) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        if resp.success {
            self.records = resp.data.unwrap_or_default();
            self.status = ListStatus::Loaded;
        } else {
            self.status = ListStatus::Failed(resp.error_text());
        }
        true
    }

    // =========================================================================
    // FORM
    // =========================================================================

    /// Load a listed record into the form. Returns `false` if the id is not listed.
    pub fn edit(&mut self, id: RecordId) -> bool {
        let Some(record) = self.record(id) else {
            return false;
        };
        self.form = record.to_form();
        self.mode = Mode::Editing(id);
        self.notice = None;
        true
    }

    /// Back to an empty create form. Never touches the network.
    pub fn cancel(&mut self) {
        self.form = self.fresh_form();
        self.mode = Mode::Creating;
    }

    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when `key` is not in the schema.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = form::field(R::fields(), key)?;
        self.form.set(field.key, value);
        Ok(())
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// Turn the form into a create or update request, per the current mode.
    ///
    /// Returns `None` (with an error notice) when the form is incomplete, and
    /// `None` without a notice while another submit is in flight.
    pub fn prepare_submit(&mut self) -> Option<Submission<R::Draft>> {
        if self.submitting {
            return None;
        }
        match R::to_draft(&self.form) {
            Ok(draft) => {
                self.submitting = true;
                self.notice = None;
                Some(match self.mode {
                    Mode::Creating => Submission::Create(draft),
                    Mode::Editing(id) => Submission::Update(id, draft),
                })
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                None
            }
        }
    }

    /// Like [`Self::prepare_submit`] but only for an update of the selected record.
    pub fn prepare_update(&mut self) -> Option<Submission<R::Draft>> {
        if self.editing_id().is_none() {
            self.notice = Some(Notice::error(NO_SELECTION));
            return None;
        }
        self.prepare_submit()
    }

    /// Fold a create/update response in. Returns `true` when the list should be re-fetched.
    pub fn finish_submit(&mut self, resp: &ApiResponse<R>) -> bool {
        self.submitting = false;
        if !resp.success {
            self.notice = Some(Notice::error(resp.error_text()));
            return false;
        }
        let verb = if self.editing_id().is_some() { "updated" } else { "created" };
        let fallback = format!("{} {verb} successfully", R::KIND.singular());
        self.notice = Some(Notice::info(resp.message_or(&fallback)));
        self.cancel();
        true
    }

    /// Fold a delete response in. Returns `true` when the list should be re-fetched.
    pub fn finish_delete(&mut self, id: RecordId, resp: &ApiResponse<Value>) -> bool {
        if !resp.success {
            self.notice = Some(Notice::error(resp.error_text()));
            return false;
        }
        if self.editing_id() == Some(id) {
            self.cancel();
        }
        let fallback = format!("{} deleted successfully", R::KIND.singular());
        self.notice = Some(Notice::info(resp.message_or(&fallback)));
        true
    }
}

/// A manager bound to a gateway and a list query.
pub struct ResourceSession<'g, R: Editable, T> {
    gateway: &'g Gateway<T>,
    manager: ResourceManager<R>,
    query: Query,
}

impl<'g, R: Editable, T: Transport> ResourceSession<'g, R, T> {
    pub fn new(gateway: &'g Gateway<T>) -> Self {
        Self { gateway, manager: ResourceManager::new(), query: Query::new() }
    }

    #[must_use]
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_defaults(mut self, defaults: FormState) -> Self {
        self.manager = self.manager.with_defaults(defaults);
        self
    }

    pub fn manager(&self) -> &ResourceManager<R> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ResourceManager<R> {
        &mut self.manager
    }

    pub fn records(&self) -> &[R] {
        self.manager.records()
    }

    /// Fetch the list. Returns `true` when it loaded.
    pub async fn refresh(&mut self) -> bool {
        let ticket = self.manager.begin_load();
        let resp = self.gateway.list::<R>(&self.query).await;
        self.manager.finish_load(ticket, resp);
        self.manager.status() == &ListStatus::Loaded
    }

    pub fn edit(&mut self, id: RecordId) -> bool {
        self.manager.edit(id)
    }

    pub fn cancel(&mut self) {
        self.manager.cancel();
    }

    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when `key` is not in the schema.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.manager.set_field(key, value)
    }

    /// Submit the form in the current mode. Returns `true` on success.
    pub async fn submit(&mut self) -> bool {
        let submission = self.manager.prepare_submit();
        self.send(submission).await
    }

    /// Submit the form as an update of the selected record. Returns `true` on success.
    pub async fn update(&mut self) -> bool {
        let submission = self.manager.prepare_update();
        self.send(submission).await
    }

    async fn send(&mut self, submission: Option<Submission<R::Draft>>) -> bool {
        let Some(submission) = submission else {
            return false;
        };
        let resp = match submission {
            Submission::Create(draft) => self.gateway.create::<R>(&draft).await,
            Submission::Update(id, draft) => self.gateway.update::<R>(id, &draft).await,
        };
        let ok = self.manager.finish_submit(&resp);
        if ok {
            self.refresh().await;
        }
        ok
    }

    /// Delete a record (the caller has already confirmed). Returns `true` on success.
    pub async fn delete(&mut self, id: RecordId) -> bool {
        let resp = self.gateway.delete::<R>(id).await;
        let ok = self.manager.finish_delete(id, &resp);
        if ok {
            self.refresh().await;
        }
        ok
    }
}
