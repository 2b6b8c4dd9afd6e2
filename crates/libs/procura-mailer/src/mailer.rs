//! Async SMTP mailer.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MailerConfig;
use crate::prelude::*;

/// A plain-text message to deliver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub recipients: Vec<String>,
    pub subject: String,
    pub message: String,
}

/// SMTP mailer over a STARTTLS relay.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    /// Builds a mailer from the given configuration.
    pub fn new(config: &MailerConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let from = config.from_address.parse::<Mailbox>()?;

        Ok(Self { transport, from })
    }

    /// Builds a mailer from `SMTP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&MailerConfig::from_env())
    }

    /// Delivers a plain-text message to all recipients. Best effort, no
    /// internal retries; the first transport failure aborts the send.
    pub async fn send(&self, email: &EmailMessage) -> Result<()> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN);
        for recipient in &email.recipients {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }
        let message = builder.body(email.message.clone())?;

        self.transport.send(message).await?;
        info!("Email sent to: {}", email.recipients.join(", "));
        Ok(())
    }

    /// Delivers a password-reset verification code.
    pub async fn send_verification_code(&self, recipient: &str, code: i32) -> Result<()> {
        let body = format!(
            "Hello,\n\nYou requested a password reset. Use this code to reset \
             your password:\n\n{code:04}\n\nIf you did not request a password \
             reset, please ignore this email."
        );
        self.send(&EmailMessage {
            recipients: vec![String::from(recipient)],
            subject: String::from("Password Reset"),
            message: body,
        })
        .await
    }
}
