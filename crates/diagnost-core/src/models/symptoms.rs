use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Free-text symptoms in the order the patient reported them.
///
/// No deduplication or validation is applied; an empty set is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomSet(pub Vec<String>);

impl SymptomSet {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(symptoms.into_iter().map(Into::into).collect())
    }

    /// Symptoms joined with `", "`, as they appear in prompts and reports.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
