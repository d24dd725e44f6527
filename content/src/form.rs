//! Field schemas and text-backed form state.
//!
//! DESIGN
//! ======
//! Every admin form is a flat map of field key to the text the user typed.
//! A resource's [`FieldSpec`] list describes how each key is labelled,
//! rendered, and whether it must be filled in; the resource converts the
//! map to its typed payload only on submit. Keeping the raw text means a
//! failed submit leaves the user's input untouched.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::types::RecordId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Url,
    Email,
    Number,
    Date,
    Time,
    Checkbox,
    /// One of a fixed set of values.
    Select(&'static [&'static str]),
    /// Comma-separated text split into a list on submit.
    List,
    /// Set by the screen (e.g. the owning site), never rendered.
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown as a column in the admin table.
    pub column: bool,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: false, column: false }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn column(mut self) -> Self {
        self.column = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(String),
    #[error("{field} must be a number, got `{value}`")]
    InvalidNumber { field: String, value: String },
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// Raw form input keyed by field key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_owned(), value.into());
    }

    /// Raw text; empty when never set.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.get(key).to_owned()
    }

    /// Trimmed text, `None` when blank.
    #[must_use]
    pub fn optional(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        if value.is_empty() { None } else { Some(value.to_owned()) }
    }

    /// Parse a decimal field; blank reads as zero.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidNumber`] for non-numeric text.
    pub fn number(&self, key: &str) -> Result<f64, FormError> {
        let raw = self.get(key).trim();
        if raw.is_empty() {
            return Ok(0.0);
        }
        raw.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| FormError::InvalidNumber { field: key.to_owned(), value: raw.to_owned() })
    }

    /// Parse an id field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingField`] when blank and [`FormError::InvalidNumber`]
    /// when not an integer.
    pub fn id(&self, key: &str) -> Result<RecordId, FormError> {
        match self.optional_id(key)? {
            Some(id) => Ok(id),
            None => Err(FormError::MissingField(key.to_owned())),
        }
    }

    /// Parse an id field that may be left blank.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidNumber`] when the text is not an integer.
    pub fn optional_id(&self, key: &str) -> Result<Option<RecordId>, FormError> {
        let raw = self.get(key).trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<RecordId>()
            .map(Some)
            .map_err(|_| FormError::InvalidNumber { field: key.to_owned(), value: raw.to_owned() })
    }

    /// Checkbox value. Blank is false.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key).trim().to_ascii_lowercase().as_str(), "true" | "on" | "1" | "yes")
    }

    pub fn set_flag(&mut self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Comma-separated entries, trimmed, blanks dropped.
    #[must_use]
    pub fn list(&self, key: &str) -> Vec<String> {
        split_list(self.get(key))
    }

    /// Comma-separated ids.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidNumber`] for the first entry that is not an integer.
    pub fn id_list(&self, key: &str) -> Result<Vec<RecordId>, FormError> {
        self.list(key)
            .into_iter()
            .map(|item| {
                item.parse::<RecordId>()
                    .map_err(|_| FormError::InvalidNumber { field: key.to_owned(), value: item.clone() })
            })
            .collect()
    }

    /// Labels of required fields left blank, in schema order.
    #[must_use]
    pub fn missing_required(&self, fields: &[FieldSpec]) -> Vec<&'static str> {
        fields
            .iter()
            .filter(|field| field.required && field.kind != FieldKind::Checkbox && self.get(field.key).trim().is_empty())
            .map(|field| field.label)
            .collect()
    }

    /// Fail on the first required field left blank.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingField`] naming the field's label.
    pub fn require(&self, fields: &[FieldSpec]) -> Result<(), FormError> {
        match self.missing_required(fields).first() {
            Some(label) => Err(FormError::MissingField((*label).to_owned())),
            None => Ok(()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split comma-joined text into trimmed, non-empty entries.
#[must_use]
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_owned).collect()
}

/// Look up a field by key.
///
/// # Errors
///
/// Returns [`FormError::UnknownField`] when no field has that key.
pub fn field<'a>(fields: &'a [FieldSpec], key: &str) -> Result<&'a FieldSpec, FormError> {
    fields.iter().find(|field| field.key == key).ok_or_else(|| FormError::UnknownField(key.to_owned()))
}

/// Render a number the way a form input shows it (`100` rather than `100.0`).
#[must_use]
pub fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
