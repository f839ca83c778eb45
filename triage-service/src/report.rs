use chrono::{DateTime, Local};

use crate::tasks::types::PatientRecord;

pub const REPORT_SUBJECT: &str = "Your Symptom Diagnosis Report";

/// Plain-text fallback for clients that do not render HTML
pub const PLAIN_FALLBACK: &str = "Please view this email in HTML.";

/// Render the HTML report body. The timestamp is captured by the caller at
/// render time.
pub fn render_report(record: &PatientRecord, diagnosed_at: DateTime<Local>) -> String {
    format!(
        r#"<html>
  <body>
    <h2>Symptom Diagnosis Report</h2>
    <p><strong>Patient Name:</strong> {}</p>
    <p><strong>Age:</strong> {}</p>
    <p><strong>Symptoms Reported:</strong> {}</p>
    <p><strong>Diagnosis Time:</strong> {}</p>
    <p><strong>Recommendation:</strong> {}</p>
  </body>
</html>"#,
        record.name,
        record.age,
        record.symptoms.join(", "),
        diagnosed_at.format("%Y-%m-%d %H:%M:%S"),
        record.recommendation.as_deref().unwrap_or("N/A"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> PatientRecord {
        PatientRecord {
            name: "Jane Doe".to_string(),
            age: "34".to_string(),
            email: "jane@example.com".to_string(),
            symptoms: vec!["chest pain".to_string(), "dizziness".to_string()],
            recommendation: Some("Please proceed to the emergency ward.".to_string()),
        }
    }

    #[test]
    fn report_contains_record_fields() {
        let html = render_report(&jane(), Local::now());

        assert!(html.contains("Jane Doe"));
        assert!(html.contains("34"));
        assert!(html.contains("chest pain, dizziness"));
        assert!(html.contains("Please proceed to the emergency ward."));
    }

    #[test]
    fn missing_recommendation_renders_placeholder() {
        let mut record = jane();
        record.recommendation = None;

        let html = render_report(&record, Local::now());
        assert!(html.contains("<strong>Recommendation:</strong> N/A"));
    }
}
