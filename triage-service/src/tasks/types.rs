use serde::{Deserialize, Serialize};

/// Context keys shared between the pipeline tasks and the web handlers.
pub mod session_keys {
    pub const PATIENT_RECORD: &str = "patient_record";
    pub const TRIAGE_CATEGORY: &str = "triage_category";
    pub const REPORT_DELIVERY: &str = "report_delivery";
}

/// One patient submission, threaded through the pipeline from intake to the
/// emailed report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    /// Free text, never parsed numerically
    pub age: String,
    /// Destination address for the report, not validated for format
    pub email: String,
    /// Normalized symptom entries in submission order
    pub symptoms: Vec<String>,
    /// Set by the recommendation task, absent before it runs
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Triage bucket assigned to a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    General,
    Emergency,
    MentalHealth,
}

impl Category {
    /// Ordered substring match over the model's answer. The model is not
    /// guaranteed to reply with exactly one word, so anything containing
    /// "emergency" wins, then "mental"; everything else is General.
    pub fn from_response(response: &str) -> Self {
        let normalized = response.trim().to_lowercase();
        if normalized.contains("emergency") {
            Category::Emergency
        } else if normalized.contains("mental") {
            Category::MentalHealth
        } else {
            Category::General
        }
    }

    /// Fixed recommendation sentence for this category
    pub fn recommendation(&self) -> &'static str {
        match self {
            Category::Emergency => {
                "The patient's symptoms indicate an emergency. Please proceed to the emergency ward."
            }
            Category::MentalHealth => {
                "The patient's symptoms suggest a mental health concern. Connect them to a counselor."
            }
            Category::General => {
                "The symptoms are general. Proceed to the general outpatient department."
            }
        }
    }
}

/// Whether the report email was actually handed to the mail relay. Delivery
/// failure never fails the pipeline, but the outcome is recorded so callers
/// can distinguish "triaged" from "triaged and notified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}
