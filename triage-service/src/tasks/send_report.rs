use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use tracing::{info, warn};
use triage_flow::{Context, FlowError, NextAction, Result, Task, TaskResult};

use crate::mailer::Mailer;
use crate::report;
use crate::tasks::types::{DeliveryStatus, PatientRecord, session_keys};

/// Task that renders the HTML report and submits it to the patient's
/// address. Delivery is best-effort: a failed send is logged and recorded
/// as `DeliveryStatus::Failed`, never propagated.
pub struct SendReportTask {
    mailer: Arc<dyn Mailer>,
}

impl SendReportTask {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl Task for SendReportTask {
    async fn run(&self, context: Context) -> Result<TaskResult> {
        let record: PatientRecord = context
            .get(session_keys::PATIENT_RECORD)
            .await
            .ok_or_else(|| FlowError::ContextError("patient_record not found".to_string()))?;

        let html = report::render_report(&record, Local::now());

        info!(task_id = %self.id(), recipient = %record.email, "sending HTML report email");

        let delivery = match self
            .mailer
            .send(
                &record.email,
                report::REPORT_SUBJECT,
                report::PLAIN_FALLBACK.to_string(),
                html,
            )
            .await
        {
            Ok(()) => {
                info!(recipient = %record.email, "report email sent");
                DeliveryStatus::Sent
            }
            Err(e) => {
                warn!(recipient = %record.email, error = %e, "failed to send report email");
                DeliveryStatus::Failed
            }
        };

        context.set(session_keys::REPORT_DELIVERY, delivery).await;

        Ok(TaskResult::new(
            Some(format!("Triage report processed for {}", record.name)),
            NextAction::End,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingMailer, RecordingMailer, jane_doe};

    #[tokio::test]
    async fn report_is_sent_to_the_patient_address() {
        let mailer = Arc::new(RecordingMailer::default());
        let task = SendReportTask::new(mailer.clone());

        let context = Context::new();
        let mut record = jane_doe();
        record.recommendation = Some("Please proceed to the emergency ward.".to_string());
        context.set(session_keys::PATIENT_RECORD, record).await;

        task.run(context.clone()).await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "jane@example.com");
        assert_eq!(sent[0].subject, report::REPORT_SUBJECT);
        assert!(sent[0].html.contains("emergency ward"));

        let delivery: DeliveryStatus = context.get(session_keys::REPORT_DELIVERY).await.unwrap();
        assert_eq!(delivery, DeliveryStatus::Sent);
    }

    #[tokio::test]
    async fn send_failure_is_recorded_but_not_fatal() {
        let task = SendReportTask::new(Arc::new(FailingMailer));

        let context = Context::new();
        context.set(session_keys::PATIENT_RECORD, jane_doe()).await;

        let result = task.run(context.clone()).await.unwrap();
        assert!(matches!(result.next_action, NextAction::End));

        let delivery: DeliveryStatus = context.get(session_keys::REPORT_DELIVERY).await.unwrap();
        assert_eq!(delivery, DeliveryStatus::Failed);
    }

    #[tokio::test]
    async fn missing_recommendation_falls_back_to_placeholder() {
        let mailer = Arc::new(RecordingMailer::default());
        let task = SendReportTask::new(mailer.clone());

        let context = Context::new();
        context.set(session_keys::PATIENT_RECORD, jane_doe()).await;

        task.run(context).await.unwrap();

        let sent = mailer.sent();
        assert!(sent[0].html.contains("N/A"));
    }
}
