//! Stub implementations of the LLM and mailer seams for pipeline tests.

use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::llm::LlmClient;
use crate::mailer::Mailer;
use crate::tasks::types::PatientRecord;

pub fn jane_doe() -> PatientRecord {
    PatientRecord {
        name: "Jane Doe".to_string(),
        age: "34".to_string(),
        email: "jane@example.com".to_string(),
        symptoms: vec!["chest pain".to_string(), "dizziness".to_string()],
        recommendation: None,
    }
}

/// LLM stub that answers every prompt with a fixed response
pub struct StubLlm {
    response: String,
}

impl StubLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.response.clone())
    }
}

/// LLM stub that always fails, standing in for a network timeout
pub struct FailingLlm;

#[async_trait]
impl LlmClient for FailingLlm {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Err(anyhow!("simulated request timeout"))
    }
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mailer stub that records every message instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        _plain_body: String,
        html_body: String,
    ) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html_body,
        });
        Ok(())
    }
}

/// Mailer stub that always fails, standing in for an authentication error
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(
        &self,
        _to: &str,
        _subject: &str,
        _plain_body: String,
        _html_body: String,
    ) -> anyhow::Result<()> {
        Err(anyhow!("simulated authentication failure"))
    }
}
