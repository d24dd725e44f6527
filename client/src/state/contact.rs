//! Public contact form.
//!
//! A successful submit clears the form and shows a confirmation that the
//! page hides again after [`CONFIRMATION_MS`]. Each confirmation carries a
//! ticket; only the timer of the latest one may hide it.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use content::manager::Notice;
use content::sequence::{RequestSequence, Ticket};
use content::types::{ContactDraft, ContactSubmission};
use content::{ApiResponse, Editable, FormState};

pub const CONFIRMATION_MS: u32 = 5000;

pub const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

#[derive(Clone, Debug, PartialEq)]
pub struct ContactFormState {
    pub form: FormState,
    pub submitting: bool,
    pub notice: Option<Notice>,
    pub confirmed: bool,
    confirmation: RequestSequence,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            form: ContactSubmission::blank_form(),
            submitting: false,
            notice: None,
            confirmed: false,
            confirmation: RequestSequence::new(),
        }
    }
}

impl ContactFormState {
    pub fn set(&mut self, key: &str, value: String) {
        self.form.set(key, value);
    }

    /// Payload for the submit call, or `None` when a required field is blank
    /// or a submit is already in flight.
    pub fn prepare(&mut self) -> Option<ContactDraft> {
        if self.submitting {
            return None;
        }
        match ContactSubmission::to_draft(&self.form) {
            Ok(draft) => {
                self.submitting = true;
                self.notice = None;
                Some(draft)
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                None
            }
        }
    }

    /// Returns the confirmation's ticket when one was shown.
    pub fn finish(&mut self, resp: &ApiResponse<ContactSubmission>) -> Option<Ticket> {
        self.submitting = false;
        if resp.success {
            self.form = ContactSubmission::blank_form();
            self.confirmed = true;
            self.notice = Some(Notice::info(resp.message_or(THANK_YOU)));
            Some(self.confirmation.issue())
        } else {
            self.notice = Some(Notice::error(resp.error_text()));
            None
        }
    }

    /// Hide the confirmation shown for `ticket`, unless a newer one replaced it.
    pub fn dismiss_confirmation(&mut self, ticket: Ticket) {
        if !self.confirmation.is_current(ticket) {
            return;
        }
        self.confirmed = false;
        if self.notice.as_ref().is_some_and(|n| !n.is_error) {
            self.notice = None;
        }
    }
}
