//! Rule-based report sections.
//!
//! Only the age, gender, and history-impact generators look at their input.
//! The rest return fixed text and ignore the symptoms and patient they are
//! given; the parameters are the hook for personalizing them later.

use std::num::IntErrorKind;

use serde::Serialize;

use diagnost_core::models::patient::{PatientInfo, is_history_absent};
use diagnost_core::models::report::Recommendations;
use diagnost_core::models::symptoms::SymptomSet;

pub const AGE_PEDIATRIC: &str =
    "Pediatric considerations, developmental factors, growth monitoring";
pub const AGE_ADULT: &str =
    "Adult risk factors, lifestyle-related conditions, occupational health";
pub const AGE_GERIATRIC: &str =
    "Geriatric considerations, age-related conditions, polypharmacy risks";
pub const AGE_UNKNOWN: &str = "Age-specific risk factors cannot be determined";

pub const GENDER_MALE: &str = "Male-specific conditions, hormonal factors, prostate health";
pub const GENDER_FEMALE: &str =
    "Female-specific conditions, hormonal factors, reproductive health";
pub const GENDER_GENERAL: &str = "General health considerations";

pub const HISTORY_IMPACT_UNKNOWN: &str = "Medical history impact cannot be assessed";
pub const HISTORY_IMPACT_PRESENT: &str =
    "Consider impact of existing conditions on current symptoms";

/// Age-bucketed risk factors. Unparseable or missing ages are not an error.
///
/// Integers outside the `i64` range still land in a bucket by their sign.
pub fn age_risk_factors(age: Option<&str>) -> &'static str {
    let Some(age) = age.map(str::trim) else {
        return AGE_UNKNOWN;
    };
    match age.parse::<i64>() {
        Ok(n) if n < 18 => AGE_PEDIATRIC,
        Ok(n) if n < 65 => AGE_ADULT,
        Ok(_) => AGE_GERIATRIC,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => AGE_GERIATRIC,
            IntErrorKind::NegOverflow => AGE_PEDIATRIC,
            _ => AGE_UNKNOWN,
        },
    }
}

pub fn gender_considerations(gender: Option<&str>) -> &'static str {
    match gender {
        Some(g) if g.eq_ignore_ascii_case("male") => GENDER_MALE,
        Some(g) if g.eq_ignore_ascii_case("female") => GENDER_FEMALE,
        _ => GENDER_GENERAL,
    }
}

/// One-line history impact used by the rule-based report.
pub fn history_impact(history: Option<&str>) -> &'static str {
    match history {
        Some(h) if !is_history_absent(h) => HISTORY_IMPACT_PRESENT,
        _ => HISTORY_IMPACT_UNKNOWN,
    }
}

pub fn acute_complications(_symptoms: &SymptomSet) -> &'static str {
    "Monitor for signs of deterioration, systemic involvement, and emergency conditions"
}

pub fn chronic_implications(_symptoms: &SymptomSet) -> &'static str {
    "Consider long-term health impact, quality of life factors, and chronic disease management"
}

pub fn screening_tests(_symptoms: &SymptomSet) -> &'static str {
    "Basic blood work, vital signs monitoring, and relevant imaging studies"
}

pub fn additional_tests(_symptoms: &SymptomSet) -> &'static str {
    "Specialized testing based on specific symptoms and risk factors"
}

pub fn immediate_interventions(_symptoms: &SymptomSet) -> &'static str {
    "Supportive care, symptom management, and monitoring of vital signs"
}

pub fn long_term_management(_symptoms: &SymptomSet) -> &'static str {
    "Lifestyle modifications, preventive measures, and regular health monitoring"
}

pub fn monitoring_parameters(_symptoms: &SymptomSet) -> &'static str {
    "Vital signs, symptom progression, and response to interventions"
}

pub fn referral_criteria(_symptoms: &SymptomSet) -> &'static str {
    "Refer to appropriate specialist if symptoms persist or worsen"
}

pub fn diet_recommendations(_symptoms: &SymptomSet, _patient: &PatientInfo) -> &'static str {
    "Balanced diet with emphasis on whole foods, adequate hydration, and appropriate portion sizes"
}

pub fn exercise_recommendations(_symptoms: &SymptomSet, _patient: &PatientInfo) -> &'static str {
    "Regular moderate exercise as tolerated, with appropriate rest periods and gradual progression"
}

pub fn stress_management(_symptoms: &SymptomSet, _patient: &PatientInfo) -> &'static str {
    "Regular relaxation techniques, adequate sleep, and stress-reduction activities"
}

pub fn recommendations(symptoms: &SymptomSet, patient: &PatientInfo) -> Recommendations {
    Recommendations {
        diet: diet_recommendations(symptoms, patient).to_string(),
        exercise: exercise_recommendations(symptoms, patient).to_string(),
        stress: stress_management(symptoms, patient).to_string(),
    }
}

/// All rule-derived section texts for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSections {
    pub age_risk_factors: &'static str,
    pub gender_considerations: &'static str,
    pub acute_complications: &'static str,
    pub chronic_implications: &'static str,
    pub screening_tests: &'static str,
    pub additional_tests: &'static str,
    pub immediate_interventions: &'static str,
    pub long_term_management: &'static str,
    pub monitoring_parameters: &'static str,
    pub referral_criteria: &'static str,
}

impl RuleSections {
    pub fn generate(symptoms: &SymptomSet, patient: &PatientInfo) -> Self {
        Self {
            age_risk_factors: age_risk_factors(patient.age().as_deref()),
            gender_considerations: gender_considerations(patient.gender().as_deref()),
            acute_complications: acute_complications(symptoms),
            chronic_implications: chronic_implications(symptoms),
            screening_tests: screening_tests(symptoms),
            additional_tests: additional_tests(symptoms),
            immediate_interventions: immediate_interventions(symptoms),
            long_term_management: long_term_management(symptoms),
            monitoring_parameters: monitoring_parameters(symptoms),
            referral_criteria: referral_criteria(symptoms),
        }
    }
}
