// Patient triage pipeline tasks
pub mod classify_patient;
pub mod recommendation;
pub mod send_report;

// Shared types and context keys
pub mod types;

// Re-export task implementations
pub use classify_patient::ClassifyPatientTask;
pub use recommendation::RecommendationTask;
pub use send_report::SendReportTask;

// Re-export session keys
pub use types::session_keys;
