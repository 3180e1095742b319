use diagnost_core::models::patient::PatientInfo;
use diagnost_core::models::symptoms::SymptomSet;

const ANALYSIS_INSTRUCTIONS: &str = "\
Please provide a detailed medical analysis including:
1. Differential diagnosis
2. Risk factors
3. Potential complications
4. Recommended diagnostic tests
5. Treatment considerations";

/// Build the summarization prompt for a case.
///
/// Embeds demographics, history, and the joined symptom list, followed by
/// the fixed analysis instructions.
pub fn build_prompt(symptoms: &SymptomSet, patient: &PatientInfo) -> String {
    format!(
        "Medical Case Analysis:\n\
         Patient Demographics:\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Medical History: {history}\n\
         \n\
         Presenting Symptoms:\n\
         {symptoms}\n\
         \n\
         {ANALYSIS_INSTRUCTIONS}\n",
        age = patient.age_or_default(),
        gender = patient.gender_or_default(),
        history = patient.medical_history_or_default(),
        symptoms = symptoms.joined(),
    )
}
