//! Log-backed notifier.

use crate::notifier::{Notifier, NotifyError};

/// Emits one structured log event per recipient instead of delivering.
///
/// Useful as a stand-in transport in dev environments; pair with
/// `openleague-observability` for formatted output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn send(&self, recipients: &[String], subject: &str, message: &str) -> Result<(), NotifyError> {
        for recipient in recipients {
            tracing::info!(recipient = %recipient, subject, message, "sending notification");
        }
        Ok(())
    }
}
