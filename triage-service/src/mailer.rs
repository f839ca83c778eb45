use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::MultiPart,
    transport::smtp::authentication::Credentials,
};

use crate::config::MailConfig;

/// Seam for submitting a two-part (plain + HTML) message to a single
/// recipient over an authenticated mail session.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        plain_body: String,
        html_body: String,
    ) -> anyhow::Result<()>;
}

/// SMTP submission over implicit TLS (port 465), authenticated with the
/// configured account credentials.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> anyhow::Result<Self> {
        let credentials = Credentials::new(config.sender.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)?
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            sender: config.sender.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        plain_body: String,
        html_body: String,
    ) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.sender.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(plain_body, html_body))?;

        self.transport.send(message).await?;
        Ok(())
    }
}
