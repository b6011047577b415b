//! Form state for the in-progress record.
//!
//! A [`FormState`] holds exactly one record-shaped working value, edited
//! field-by-field until it is snapshotted and handed to the store. It has
//! no side effects beyond the in-memory value and performs no validation:
//! the entry surface constrains choices, the holder does not.

use tracing::warn;

use crate::record::Record;

/// A named scalar field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Logo image address (text).
    LogoUrl,
    /// Company name (text).
    CompanyName,
    /// "New" marker (flag).
    IsNew,
    /// "Featured" marker (flag).
    IsFeatured,
    /// Position level (text).
    Position,
    /// Job type (text).
    JobType,
    /// Location (text).
    Location,
}

/// A scalar value accepted by [`FormState::set_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A text value for one of the string fields.
    Text(String),
    /// A boolean value for one of the flag fields.
    Flag(bool),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// The single in-progress record being edited.
///
/// Defaults to the all-empty record. Mutations are total: any text is
/// accepted for the enum-like fields, and a value of the wrong kind for a
/// field is a logged no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    record: Record,
}

impl FormState {
    /// Create a form holding the default empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named scalar field.
    ///
    /// Text goes to the string fields, flags to the boolean fields. A
    /// mismatched kind leaves the form unchanged.
    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        match (field, value.into()) {
            (Field::LogoUrl, FieldValue::Text(value)) => self.record.logo_url = value,
            (Field::CompanyName, FieldValue::Text(value)) => self.record.company_name = value,
            (Field::Position, FieldValue::Text(value)) => self.record.position = value,
            (Field::JobType, FieldValue::Text(value)) => self.record.job_type = value,
            (Field::Location, FieldValue::Text(value)) => self.record.location = value,
            (Field::IsNew, FieldValue::Flag(value)) => self.record.is_new = value,
            (Field::IsFeatured, FieldValue::Flag(value)) => self.record.is_featured = value,
            (field, value) => {
                warn!("ignoring {:?} for field {:?}: wrong kind", value, field);
            }
        }
    }

    /// Toggle a skill: remove it if selected, append it otherwise.
    ///
    /// Two toggles of the same skill cancel out. Removal keeps the
    /// remaining selection order gap-free.
    pub fn toggle_skill(&mut self, skill: &str) {
        let skills = &mut self.record.skills;
        if let Some(index) = skills.iter().position(|s| s == skill) {
            skills.remove(index);
        } else {
            skills.push(skill.to_string());
        }
    }

    /// Replace the form contents with the default empty record.
    pub fn reset(&mut self) {
        self.record = Record::default();
    }

    /// Take an independent copy of the current form contents.
    ///
    /// Later edits or a [`reset`](Self::reset) never affect a snapshot
    /// already taken.
    #[must_use]
    pub fn snapshot(&self) -> Record {
        self.record.clone()
    }
}
