use std::time::Duration;

use anyhow::anyhow;

const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";
const DEFAULT_SESSION_SECRET: &str = "dummy-secret";
const DEFAULT_SESSION_TTL_SECS: u64 = 1800;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process-wide configuration, loaded once at startup and passed to the
/// components that need it. Tasks never read the environment themselves.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Credential for the Gemini classification calls
    pub gemini_api_key: String,
    pub mail: MailConfig,
    /// Key used to sign the session cookie
    pub session_secret: String,
    /// How long a stored form submission stays valid
    pub session_ttl: Duration,
    pub bind_addr: String,
}

/// Mail account identity and credentials for the report notifier
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub relay: String,
    pub sender: String,
    pub password: String,
}

impl ServiceConfig {
    /// Load configuration from the process environment. A missing LLM or
    /// mail credential is an error; everything else has a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let gemini_api_key = require_env("GEMINI_API_KEY")?;
        let sender = require_env("SENDER_EMAIL")?;
        let password = require_env("EMAIL_APP_PASSWORD")?;

        let relay = std::env::var("SMTP_RELAY").unwrap_or_else(|_| DEFAULT_SMTP_RELAY.to_string());
        let session_secret = std::env::var("SESSION_SECRET")
            .unwrap_or_else(|_| DEFAULT_SESSION_SECRET.to_string());
        let session_ttl = std::env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_SESSION_TTL_SECS));
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            gemini_api_key,
            mail: MailConfig {
                relay,
                sender,
                password,
            },
            session_secret,
            session_ttl,
            bind_addr,
        })
    }
}

fn require_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|_| anyhow!("{name} not set"))
}
