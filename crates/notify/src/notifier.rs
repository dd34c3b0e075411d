//! Notifier abstraction consumed by teams, competitions, and leagues.

use std::sync::Arc;

use thiserror::Error;

use openleague_core::DomainError;

/// Error surfaced by a fan-out.
///
/// The domain never catches or reinterprets these; they propagate to the caller.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Recipient resolution failed before anything reached the transport.
    #[error("recipient resolution failed: {0}")]
    Resolution(#[from] DomainError),

    /// The transport could not deliver the notification.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// A single fan-out as handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub recipients: Vec<String>,
    pub subject: String,
    pub message: String,
}

/// Domain-agnostic notification transport.
///
/// Callers guarantee that `recipients` carries no duplicate member addresses
/// from a single fan-out and omits members without an address. Implementations
/// own everything else: sender identity, formatting, the actual delivery
/// mechanism.
///
/// ## Thread Safety
///
/// The trait requires `Send + Sync` so a single transport handle can be shared
/// across the application.
pub trait Notifier: Send + Sync {
    fn send(&self, recipients: &[String], subject: &str, message: &str) -> Result<(), NotifyError>;
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn send(&self, recipients: &[String], subject: &str, message: &str) -> Result<(), NotifyError> {
        (**self).send(recipients, subject, message)
    }
}
