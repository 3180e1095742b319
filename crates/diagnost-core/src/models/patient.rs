use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Placeholder rendered for any patient field that was not supplied.
pub const NOT_PROVIDED: &str = "Not provided";

pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const MEDICAL_HISTORY: &str = "medical_history";

/// Demographics and history supplied alongside the symptoms.
///
/// Holds the client's JSON object as received so that it is echoed back
/// unchanged. The typed accessors read `age`, `gender`, and
/// `medical_history` as text: strings are used as-is, `null` counts as
/// absent, and any other JSON value is rendered as its JSON text (so a
/// numeric age of `40` reads as `"40"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInfo(#[ts(type = "Record<string, unknown>")] Map<String, Value>);

impl PatientInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for constructing cases in code.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Text view of one field. `None` when the key is missing or `null`.
    pub fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s)),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    pub fn age(&self) -> Option<Cow<'_, str>> {
        self.field(AGE)
    }

    pub fn gender(&self) -> Option<Cow<'_, str>> {
        self.field(GENDER)
    }

    pub fn medical_history(&self) -> Option<Cow<'_, str>> {
        self.field(MEDICAL_HISTORY)
    }

    pub fn age_or_default(&self) -> Cow<'_, str> {
        self.age().unwrap_or(Cow::Borrowed(NOT_PROVIDED))
    }

    pub fn gender_or_default(&self) -> Cow<'_, str> {
        self.gender().unwrap_or(Cow::Borrowed(NOT_PROVIDED))
    }

    pub fn medical_history_or_default(&self) -> Cow<'_, str> {
        self.medical_history().unwrap_or(Cow::Borrowed(NOT_PROVIDED))
    }
}

impl From<Map<String, Value>> for PatientInfo {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Returns true when a history text carries no information: empty,
/// whitespace, or the `"Not provided"` sentinel in any case.
///
/// Whitespace-only history deliberately counts as absent. A blank field
/// is read as "nothing supplied" rather than as a history with no
/// recognised conditions.
pub fn is_history_absent(history: &str) -> bool {
    let trimmed = history.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_PROVIDED)
}
