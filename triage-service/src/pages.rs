//! Minimal server-rendered pages for the intake form and the result view.

use crate::tasks::types::{DeliveryStatus, PatientRecord};

pub fn intake_page() -> String {
    r#"<html>
  <head><title>Hospital - AI Triage Assistant</title></head>
  <body>
    <h2>Hospital - AI Triage Assistant</h2>
    <form method="post" action="/">
      <p><label>Name: <input type="text" name="name"></label></p>
      <p><label>Age: <input type="text" name="age"></label></p>
      <p><label>Email: <input type="text" name="email"></label></p>
      <p><label>Symptoms (comma separated): <input type="text" name="symptoms"></label></p>
      <p><button type="submit">Submit</button></p>
    </form>
  </body>
</html>"#
        .to_string()
}

pub fn result_page(record: &PatientRecord, delivery: Option<DeliveryStatus>) -> String {
    let delivery_line = match delivery {
        Some(DeliveryStatus::Sent) => format!("Report emailed to {}.", record.email),
        Some(DeliveryStatus::Failed) => "Report email could not be delivered.".to_string(),
        None => "Report email was not attempted.".to_string(),
    };

    format!(
        r#"<html>
  <head><title>Triage Result</title></head>
  <body>
    <h2>Triage Result</h2>
    <p><strong>Patient Name:</strong> {}</p>
    <p><strong>Age:</strong> {}</p>
    <p><strong>Symptoms Reported:</strong> {}</p>
    <p><strong>Recommendation:</strong> {}</p>
    <p><strong>Report Email:</strong> {}</p>
    <p><a href="/">Start a new triage</a></p>
  </body>
</html>"#,
        record.name,
        record.age,
        record.symptoms.join(", "),
        record.recommendation.as_deref().unwrap_or("N/A"),
        delivery_line,
    )
}
