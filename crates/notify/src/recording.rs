//! In-memory notifier for tests/dev.

use std::sync::Mutex;

use crate::notifier::{Delivery, Notifier, NotifyError};

/// Captures every fan-out instead of delivering it.
///
/// - No IO / no async
/// - Deliveries are kept in send order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    deliveries: Mutex<Vec<Delivery>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All fan-outs captured so far, in send order.
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .map(|deliveries| deliveries.clone())
            .unwrap_or_default()
    }

    /// The most recent fan-out, if any.
    pub fn last(&self) -> Option<Delivery> {
        self.deliveries
            .lock()
            .ok()
            .and_then(|deliveries| deliveries.last().cloned())
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, recipients: &[String], subject: &str, message: &str) -> Result<(), NotifyError> {
        let mut deliveries = self
            .deliveries
            .lock()
            .map_err(|_| NotifyError::Delivery("recorder lock poisoned".to_string()))?;

        deliveries.push(Delivery {
            recipients: recipients.to_vec(),
            subject: subject.to_string(),
            message: message.to_string(),
        });

        Ok(())
    }
}
