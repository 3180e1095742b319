use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A medical-history classification detected by keyword matching.
///
/// Declaration order is significant: it is the order in which matched
/// categories are rendered, and `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConditionCategory {
    Diabetes,
    Hypertension,
    HeartDisease,
    Respiratory,
    Arthritis,
    MentalHealth,
    Allergies,
    Cancer,
}

/// One row of the condition table: a category and its lowercase triggers.
#[derive(Debug, Clone, Copy)]
pub struct ConditionRule {
    pub category: ConditionCategory,
    pub keywords: &'static [&'static str],
}

/// The condition table, in rendering order.
pub static CONDITION_TABLE: [ConditionRule; 8] = [
    ConditionRule {
        category: ConditionCategory::Diabetes,
        keywords: &["diabetes", "diabetic", "blood sugar", "insulin"],
    },
    ConditionRule {
        category: ConditionCategory::Hypertension,
        keywords: &["hypertension", "high blood pressure", "hbp"],
    },
    ConditionRule {
        category: ConditionCategory::HeartDisease,
        keywords: &["heart disease", "cardiac", "heart attack", "angina"],
    },
    ConditionRule {
        category: ConditionCategory::Respiratory,
        keywords: &["asthma", "copd", "bronchitis", "pneumonia"],
    },
    ConditionRule {
        category: ConditionCategory::Arthritis,
        keywords: &["arthritis", "joint pain", "rheumatoid", "osteoarthritis"],
    },
    ConditionRule {
        category: ConditionCategory::MentalHealth,
        keywords: &["depression", "anxiety", "bipolar", "schizophrenia"],
    },
    ConditionRule {
        category: ConditionCategory::Allergies,
        keywords: &["allergies", "allergic", "anaphylaxis"],
    },
    ConditionRule {
        category: ConditionCategory::Cancer,
        keywords: &["cancer", "tumor", "malignancy", "oncology"],
    },
];

impl ConditionCategory {
    /// Snake-case identifier, e.g. `"heart_disease"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
            Self::HeartDisease => "heart_disease",
            Self::Respiratory => "respiratory",
            Self::Arthritis => "arthritis",
            Self::MentalHealth => "mental_health",
            Self::Allergies => "allergies",
            Self::Cancer => "cancer",
        }
    }

    /// Title-cased name with underscores as spaces, e.g. `"Heart Disease"`.
    pub fn title(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hypertension",
            Self::HeartDisease => "Heart Disease",
            Self::Respiratory => "Respiratory",
            Self::Arthritis => "Arthritis",
            Self::MentalHealth => "Mental Health",
            Self::Allergies => "Allergies",
            Self::Cancer => "Cancer",
        }
    }

    /// All categories in table order.
    pub fn all() -> impl Iterator<Item = ConditionCategory> {
        CONDITION_TABLE.iter().map(|rule| rule.category)
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
