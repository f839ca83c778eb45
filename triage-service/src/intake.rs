use serde::Deserialize;

use crate::tasks::types::PatientRecord;

/// Raw form fields as submitted by the patient
#[derive(Debug, Deserialize)]
pub struct IntakeForm {
    pub name: String,
    pub age: String,
    pub email: String,
    /// Comma-separated free text
    pub symptoms: String,
}

/// Build a normalized patient record from the raw submission. Name, age and
/// email pass through unchanged; only the symptom list is normalized.
pub fn normalize(form: IntakeForm) -> PatientRecord {
    PatientRecord {
        name: form.name,
        age: form.age,
        email: form.email,
        symptoms: split_symptoms(&form.symptoms),
        recommendation: None,
    }
}

/// Split on commas, trim each piece, drop empty pieces, preserve order.
fn split_symptoms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_drops_empty_segments() {
        assert_eq!(split_symptoms("a, b ,, c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn preserves_submission_order() {
        assert_eq!(
            split_symptoms("dizziness,chest pain, nausea"),
            vec!["dizziness", "chest pain", "nausea"]
        );
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(split_symptoms("").is_empty());
        assert!(split_symptoms(" , ,, ").is_empty());
    }

    #[test]
    fn malformed_age_and_email_pass_through() {
        let record = normalize(IntakeForm {
            name: "Jane Doe".to_string(),
            age: "not a number".to_string(),
            email: "not-an-email".to_string(),
            symptoms: "headache".to_string(),
        });

        assert_eq!(record.age, "not a number");
        assert_eq!(record.email, "not-an-email");
        assert_eq!(record.symptoms, vec!["headache"]);
        assert!(record.recommendation.is_none());
    }
}
