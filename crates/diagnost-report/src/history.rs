//! History analysis text, built from a declarative per-field table.
//!
//! Each of the six fields has canned text for the two no-match cases and,
//! for matched categories, a header line followed by one bullet per
//! category in table order.

use diagnost_core::models::condition::ConditionCategory;
use diagnost_core::models::history::{HistoryAnalysis, HistoryClassification};

/// Text templates for one history-analysis field.
#[derive(Debug, Clone, Copy)]
pub struct FieldTemplate {
    pub no_history: &'static str,
    pub no_matches: &'static str,
    pub header: &'static str,
    /// Appended to the category title on each bullet.
    pub line_suffix: &'static str,
}

pub const SUMMARY: FieldTemplate = FieldTemplate {
    no_history: "No medical history provided. Please provide medical history for better analysis.",
    no_matches: "No specific medical conditions detected in the provided history.",
    header: "Detected medical conditions:",
    line_suffix: "",
};

pub const RISK_FACTORS: FieldTemplate = FieldTemplate {
    no_history: "Unable to assess risk factors without medical history.",
    no_matches: "Standard risk factors based on age and gender apply.",
    header: "Additional risk factors based on medical history:",
    line_suffix: "-related complications",
};

pub const COMPLICATIONS: FieldTemplate = FieldTemplate {
    no_history: "Unable to assess potential complications without medical history.",
    no_matches: "Standard complication monitoring recommended.",
    header: "Potential complications to monitor:",
    line_suffix: "-related complications",
};

pub const RECOMMENDED_TESTS: FieldTemplate = FieldTemplate {
    no_history: "Standard screening tests recommended based on age and gender.",
    no_matches: "Standard screening tests recommended.",
    header: "Additional tests recommended based on medical history:",
    line_suffix: "-specific monitoring",
};

pub const PRECAUTIONS: FieldTemplate = FieldTemplate {
    no_history: "General precautions recommended. Specific precautions require medical history.",
    no_matches: "Standard precautions recommended.",
    header: "Additional precautions based on medical history:",
    line_suffix: "-specific precautions",
};

pub const MONITORING: FieldTemplate = FieldTemplate {
    no_history: "Standard monitoring parameters recommended.",
    no_matches: "Standard monitoring parameters recommended.",
    header: "Additional monitoring parameters based on medical history:",
    line_suffix: "-specific monitoring",
};

impl FieldTemplate {
    pub fn render(&self, classification: &HistoryClassification) -> String {
        match classification {
            HistoryClassification::NoHistoryProvided => self.no_history.to_string(),
            HistoryClassification::NoMatches => self.no_matches.to_string(),
            HistoryClassification::Matches(categories) => {
                self.render_matches(categories.iter().copied())
            }
        }
    }

    fn render_matches(&self, categories: impl Iterator<Item = ConditionCategory>) -> String {
        let mut out = format!("{}\n", self.header);
        for category in categories {
            out.push_str(&format!("- {}{}\n", category.title(), self.line_suffix));
        }
        out
    }
}

/// Describe a classified history as the six report fields.
pub fn describe(classification: &HistoryClassification) -> HistoryAnalysis {
    HistoryAnalysis {
        summary: SUMMARY.render(classification),
        risk_factors: RISK_FACTORS.render(classification),
        complications: COMPLICATIONS.render(classification),
        recommended_tests: RECOMMENDED_TESTS.render(classification),
        precautions: PRECAUTIONS.render(classification),
        monitoring: MONITORING.render(classification),
    }
}
