//! Contact form model: field values, per-field validation status, and the
//! success banner.
//!
//! DESIGN
//! ======
//! The form is built from a layout listing which inputs exist. Fields left out
//! of the layout are skipped by blur and submit alike, so pages without a
//! subject or message input still validate and submit.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::consts::{BORDER_INVALID, BORDER_VALID};
use crate::util::validate::{validate_email, validate_message, validate_name, validate_subject};

/// Inputs the contact form can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Element id of the input.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Element id of the inline error container.
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Subject => "subjectError",
            Self::Message => "messageError",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn validate(self, value: &str) -> String {
        match self {
            Self::Name => validate_name(value),
            Self::Email => validate_email(value),
            Self::Subject => validate_subject(value),
            Self::Message => validate_message(value),
        }
    }
}

/// Visual validation state of one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not validated since the last reset; default border.
    #[default]
    Neutral,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    fn from_message(message: String) -> Self {
        if message.is_empty() { Self::Valid } else { Self::Invalid(message) }
    }

    /// Inline border color, `None` for the stylesheet default.
    pub fn border_color(&self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Valid => Some(BORDER_VALID),
            Self::Invalid(_) => Some(BORDER_INVALID),
        }
    }

    pub fn error_text(&self) -> &str {
        match self {
            Self::Invalid(message) => message,
            Self::Neutral | Self::Valid => "",
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct FieldEntry {
    field: ContactField,
    value: String,
    status: FieldStatus,
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All present fields passed; the form was cleared and the banner shown.
    /// Carries the banner sequence number for the auto-hide timer.
    Sent { banner_seq: u64 },
    /// At least one field failed; errors are shown and the banner hidden.
    Rejected,
}

/// Contact form state shared by the inputs, error rows and banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    fields: Vec<FieldEntry>,
    banner_visible: bool,
    banner_seq: u64,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::with_layout(&ContactField::ALL)
    }
}

impl ContactFormState {
    /// Form carrying only the inputs in `layout`, in that order.
    pub fn with_layout(layout: &[ContactField]) -> Self {
        let mut fields: Vec<FieldEntry> = Vec::with_capacity(layout.len());
        for &field in layout {
            if fields.iter().any(|entry| entry.field == field) {
                continue;
            }
            fields.push(FieldEntry { field, value: String::new(), status: FieldStatus::Neutral });
        }
        Self { fields, banner_visible: false, banner_seq: 0 }
    }

    pub fn has_field(&self, field: ContactField) -> bool {
        self.entry(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.fields.iter().map(|entry| entry.field)
    }

    pub fn value(&self, field: ContactField) -> Option<&str> {
        self.entry(field).map(|entry| entry.value.as_str())
    }

    pub fn status(&self, field: ContactField) -> Option<&FieldStatus> {
        self.entry(field).map(|entry| &entry.status)
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    /// Store typed input. Absent fields ignore the write.
    pub fn set_value(&mut self, field: ContactField, value: impl Into<String>) {
        if let Some(entry) = self.entry_mut(field) {
            entry.value = value.into();
        }
    }

    /// Validate a single field on loss of focus. Returns the message shown,
    /// or `None` when the field is not part of this layout.
    pub fn blur(&mut self, field: ContactField) -> Option<String> {
        let entry = self.entry_mut(field)?;
        let message = field.validate(&entry.value);
        entry.status = FieldStatus::from_message(message.clone());
        Some(message)
    }

    /// Validate every present field and, if all pass, reset the form and
    /// raise the success banner.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.banner_visible = false;

        let mut all_valid = true;
        for entry in &mut self.fields {
            let message = entry.field.validate(&entry.value);
            all_valid &= message.is_empty();
            entry.status = FieldStatus::from_message(message);
        }

        if !all_valid {
            return SubmitOutcome::Rejected;
        }

        for entry in &mut self.fields {
            entry.value.clear();
            entry.status = FieldStatus::Neutral;
        }
        self.banner_seq += 1;
        self.banner_visible = true;
        SubmitOutcome::Sent { banner_seq: self.banner_seq }
    }

    /// Auto-hide for the banner raised by submission `banner_seq`.
    ///
    /// A timer left over from an earlier submission does not cut a newer
    /// banner short.
    pub fn hide_banner(&mut self, banner_seq: u64) {
        if banner_seq == self.banner_seq {
            self.banner_visible = false;
        }
    }

    fn entry(&self, field: ContactField) -> Option<&FieldEntry> {
        self.fields.iter().find(|entry| entry.field == field)
    }

    fn entry_mut(&mut self, field: ContactField) -> Option<&mut FieldEntry> {
        self.fields.iter_mut().find(|entry| entry.field == field)
    }
}
