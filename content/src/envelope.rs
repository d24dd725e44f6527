//! The uniform `{success, data, error, message}` response envelope.
//!
//! Every gateway call resolves to an [`ApiResponse`]; transport failures are
//! folded into the same shape so callers handle one result type.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

/// Fallback banner text when a failed envelope carries no `error`.
pub const GENERIC_ERROR: &str = "Request failed";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None, message: None }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()), message: None }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Error text to show in a banner; never empty for a failed response.
    #[must_use]
    pub fn error_text(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR.to_owned())
    }

    /// Banner text for a failed response, `None` on success.
    #[must_use]
    pub fn failure_text(&self) -> Option<String> {
        (!self.success).then(|| self.error_text())
    }

    /// Success text, falling back to `default` when the server sent none.
    #[must_use]
    pub fn message_or(&self, default: &str) -> String {
        self.message.clone().filter(|text| !text.is_empty()).unwrap_or_else(|| default.to_owned())
    }

    /// `Ok(data)` for a successful envelope that carries data, otherwise the banner text.
    ///
    /// # Errors
    ///
    /// Returns [`Self::error_text`] when `success` is false or `data` is missing.
    pub fn into_result(self) -> Result<T, String> {
        if !self.success {
            return Err(self.error_text());
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err("response carried no data".to_owned()),
        }
    }

    /// Data for a successful envelope, else `None`.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }

    /// Change the payload type, keeping status and texts.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse { success: self.success, data: self.data.map(f), error: self.error, message: self.message }
    }
}
