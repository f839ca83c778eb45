use async_trait::async_trait;
use rig::{client::CompletionClient, completion::Prompt, providers::gemini};

/// Gemini model used for triage classification
const TRIAGE_MODEL: &str = "gemini-1.5-flash";

const TRIAGE_PREAMBLE: &str = "You are an AI triage assistant for a hospital intake service.";

/// Seam for the text-generation service the classifier consults. A single
/// prompt in, a short natural-language answer out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Production client backed by the Gemini completion API
pub struct GeminiLlm {
    api_key: String,
}

impl GeminiLlm {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl LlmClient for GeminiLlm {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let client = gemini::Client::new(&self.api_key);
        let agent = client
            .agent(TRIAGE_MODEL)
            .preamble(TRIAGE_PREAMBLE)
            .build();

        let response = agent.prompt(prompt).await?;
        Ok(response)
    }
}
