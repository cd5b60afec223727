//! Outbound notifications.
//!
//! The only message the service sends is the password-recovery email. The
//! API depends on the [`RecoveryNotifier`] trait; the binary picks
//! [`EmailDelivery`] when SMTP is configured and [`LogOnlyNotifier`]
//! otherwise.

pub mod delivery;
pub mod notifier;

pub use delivery::email::{EmailConfig, EmailDelivery, EmailError};
pub use notifier::{LogOnlyNotifier, MemoryNotifier, RecoveryEmail, RecoveryNotifier};
