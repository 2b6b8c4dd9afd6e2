//! SMTP configuration management.

use std::fmt::Display;

/// SMTP connection and sender configuration.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port (STARTTLS).
    pub port: u16,
    /// Username for authentication, usually the sender address.
    pub username: String,
    /// Password for authentication.
    pub password: String,
    /// Sender address stamped on outgoing mail.
    pub from_address: String,
}

impl MailerConfig {
    /// Create mailer configuration from environment variables.
    ///
    /// Reads `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`, and
    /// `SMTP_FROM`, falling back to development defaults when unset.
    pub fn from_env() -> Self {
        let username =
            std::env::var("SMTP_USERNAME").unwrap_or_else(|_| String::from("noreply@procura.st"));
        Self {
            host: std::env::var("SMTP_HOST").unwrap_or_else(|_| String::from("smtp.gmail.com")),
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            from_address: std::env::var("SMTP_FROM").unwrap_or_else(|_| username.clone()),
            password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            username,
        }
    }
}

impl Display for MailerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} as {}", self.host, self.port, self.from_address)
    }
}
