use async_trait::async_trait;
use tracing::info;
use triage_flow::{Context, FlowError, NextAction, Result, Task, TaskResult};

use crate::tasks::types::{Category, PatientRecord, session_keys};

/// Task that maps the triage category to its fixed recommendation sentence
/// and records it on the patient record. Pure rule lookup, no side effects.
pub struct RecommendationTask;

#[async_trait]
impl Task for RecommendationTask {
    async fn run(&self, context: Context) -> Result<TaskResult> {
        let category: Category = context
            .get(session_keys::TRIAGE_CATEGORY)
            .await
            .ok_or_else(|| FlowError::ContextError("triage_category not found".to_string()))?;

        let mut record: PatientRecord = context
            .get(session_keys::PATIENT_RECORD)
            .await
            .ok_or_else(|| FlowError::ContextError("patient_record not found".to_string()))?;

        record.recommendation = Some(category.recommendation().to_string());
        info!(task_id = %self.id(), ?category, "recommendation recorded");

        context.set(session_keys::PATIENT_RECORD, record).await;

        Ok(TaskResult::new(None, NextAction::Continue))
    }
}
