use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use triage_flow::{Context, FlowError, NextAction, Result, Task, TaskResult};

use crate::llm::LlmClient;
use crate::tasks::types::{Category, PatientRecord, session_keys};

/// Task that classifies the patient into a triage category from the
/// reported symptom list. The LLM call is made once, with no retry; a
/// failure aborts the pipeline run.
pub struct ClassifyPatientTask {
    llm: Arc<dyn LlmClient>,
}

impl ClassifyPatientTask {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

fn build_prompt(symptoms: &[String]) -> String {
    let symptom_list = symptoms
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Based on the list of patient symptoms, classify the patient into one of the following categories:\n\
         - General\n\
         - Emergency\n\
         - Mental Health\n\n\
         Symptoms:\n{symptom_list}\n\n\
         Respond with only one word: General, Emergency, or Mental Health."
    )
}

#[async_trait]
impl Task for ClassifyPatientTask {
    async fn run(&self, context: Context) -> Result<TaskResult> {
        let record: PatientRecord = context
            .get(session_keys::PATIENT_RECORD)
            .await
            .ok_or_else(|| FlowError::ContextError("patient_record not found".to_string()))?;

        info!(
            task_id = %self.id(),
            patient = %record.name,
            symptom_count = record.symptoms.len(),
            "classifying patient symptoms"
        );

        let prompt = build_prompt(&record.symptoms);
        let response = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| FlowError::TaskExecutionFailed(format!("classification call failed: {e}")))?;

        let category = Category::from_response(&response);
        info!(task_id = %self.id(), ?category, "patient classified");

        context.set(session_keys::TRIAGE_CATEGORY, category).await;

        Ok(TaskResult::new(None, NextAction::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingLlm, StubLlm, jane_doe};

    async fn context_with_record() -> Context {
        let context = Context::new();
        context.set(session_keys::PATIENT_RECORD, jane_doe()).await;
        context
    }

    #[tokio::test]
    async fn verbose_answer_still_classifies_as_emergency() {
        let task =
            ClassifyPatientTask::new(Arc::new(StubLlm::new("this is an EMERGENCY ward case")));
        let context = context_with_record().await;

        task.run(context.clone()).await.unwrap();

        let category: Category = context.get(session_keys::TRIAGE_CATEGORY).await.unwrap();
        assert_eq!(category, Category::Emergency);
    }

    #[tokio::test]
    async fn llm_failure_aborts_the_task() {
        let task = ClassifyPatientTask::new(Arc::new(FailingLlm));
        let context = context_with_record().await;

        let err = task.run(context.clone()).await.unwrap_err();
        assert!(matches!(err, FlowError::TaskExecutionFailed(_)));

        let category: Option<Category> = context.get(session_keys::TRIAGE_CATEGORY).await;
        assert!(category.is_none());
    }

    #[test]
    fn prompt_enumerates_symptoms_as_bullets() {
        let prompt = build_prompt(&["chest pain".to_string(), "dizziness".to_string()]);

        assert!(prompt.contains("- chest pain\n- dizziness"));
        assert!(prompt.contains("Respond with only one word"));
    }
}
