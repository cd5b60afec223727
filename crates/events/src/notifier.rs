//! The recovery-notification seam.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::delivery::email::EmailError;

/// Subject line of the recovery email.
pub const RECOVERY_SUBJECT: &str = "Recuperación de contraseña";

/// A password-recovery email addressed to one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryEmail {
    pub to: String,
    pub link: String,
}

impl RecoveryEmail {
    pub fn new(to: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            link: link.into(),
        }
    }

    pub fn subject(&self) -> &'static str {
        RECOVERY_SUBJECT
    }

    pub fn body(&self) -> String {
        format!(
            "Hola,\n\nHaz clic en el siguiente enlace para recuperar tu contraseña:\n\n{}\n\nSi no solicitaste esto, ignora este mensaje.",
            self.link
        )
    }
}

/// Sends recovery links. Callers treat delivery as best-effort and only log
/// failures.
#[async_trait]
pub trait RecoveryNotifier: Send + Sync {
    async fn send_recovery(&self, email: RecoveryEmail) -> Result<(), EmailError>;
}

/// Used when SMTP is not configured: the link is written to the log.
#[derive(Debug, Default)]
pub struct LogOnlyNotifier;

#[async_trait]
impl RecoveryNotifier for LogOnlyNotifier {
    async fn send_recovery(&self, email: RecoveryEmail) -> Result<(), EmailError> {
        tracing::warn!(to = %email.to, link = %email.link, "SMTP not configured, recovery email not sent");
        Ok(())
    }
}

/// Keeps every email in memory. Used by tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<RecoveryEmail>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emails sent so far, oldest first.
    pub fn sent(&self) -> Vec<RecoveryEmail> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl RecoveryNotifier for MemoryNotifier {
    async fn send_recovery(&self, email: RecoveryEmail) -> Result<(), EmailError> {
        match self.sent.lock() {
            Ok(mut sent) => sent.push(email),
            Err(poisoned) => poisoned.into_inner().push(email),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_embeds_link() {
        let email = RecoveryEmail::new("ana@casas.example", "https://app.example/reset-password/abc");
        assert!(email
            .body()
            .contains("\n\nhttps://app.example/reset-password/abc\n\n"));
        assert_eq!(email.subject(), "Recuperación de contraseña");
    }

    #[tokio::test]
    async fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier
            .send_recovery(RecoveryEmail::new("a@x.example", "l1"))
            .await
            .unwrap();
        notifier
            .send_recovery(RecoveryEmail::new("b@x.example", "l2"))
            .await
            .unwrap();
        let to: Vec<String> = notifier.sent().into_iter().map(|e| e.to).collect();
        assert_eq!(to, vec!["a@x.example", "b@x.example"]);
    }

    #[tokio::test]
    async fn log_only_notifier_never_fails() {
        assert!(LogOnlyNotifier
            .send_recovery(RecoveryEmail::new("a@x.example", "l1"))
            .await
            .is_ok());
    }
}
