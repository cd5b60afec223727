//! Recovery email delivery via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport. Configuration
//! is loaded from environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no mailer should be
//! constructed.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::notifier::{RecoveryEmail, RecoveryNotifier};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@prefabricadas.local";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    /// Defaults to 587.
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set or empty.
    ///
    /// | Variable        | Required | Default                        |
    /// |-----------------|----------|--------------------------------|
    /// | `SMTP_HOST`     | yes      | -                              |
    /// | `SMTP_PORT`     | no       | `587`                          |
    /// | `SMTP_FROM`     | no       | `noreply@prefabricadas.local`  |
    /// | `SMTP_USER`     | no       | -                              |
    /// | `SMTP_PASSWORD` | no       | -                              |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok().filter(|h| !h.is_empty())?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends recovery emails via SMTP.
pub struct EmailDelivery {
    config: EmailConfig,
}

impl EmailDelivery {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Assemble the MIME message without sending it.
    pub fn build_message(&self, email: &RecoveryEmail) -> Result<Message, EmailError> {
        Message::builder()
            .from(self.config.from_address.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body())
            .map_err(|e| EmailError::Build(e.to_string()))
    }

    /// Send one recovery email.
    pub async fn deliver(&self, email: &RecoveryEmail) -> Result<(), EmailError> {
        let message = self.build_message(email)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(message).await?;

        tracing::info!(to = %email.to, "Recovery email sent");
        Ok(())
    }
}

#[async_trait]
impl RecoveryNotifier for EmailDelivery {
    async fn send_recovery(&self, email: RecoveryEmail) -> Result<(), EmailError> {
        self.deliver(&email).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".into(),
            smtp_port: DEFAULT_SMTP_PORT,
            from_address: DEFAULT_FROM_ADDRESS.into(),
            smtp_user: None,
            smtp_password: None,
        }
    }

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        std::env::remove_var("SMTP_HOST");
        assert!(EmailConfig::from_env().is_none());
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn message_rejects_bad_recipient() {
        let delivery = EmailDelivery::new(config());
        let email = RecoveryEmail::new("not-an-email", "http://localhost:3000/reset-password/x");
        let err = delivery.build_message(&email).unwrap_err();
        assert!(err.to_string().contains("Email address parse error"));
    }

    #[test]
    fn message_carries_subject() {
        let delivery = EmailDelivery::new(config());
        let email = RecoveryEmail::new("ana@casas.example", "http://localhost:3000/reset-password/x");
        let message = delivery.build_message(&email).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: ana@casas.example"));
    }
}
