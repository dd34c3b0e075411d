//! Notification boundary (mechanics only).
//!
//! The domain resolves recipients and hands an ordered list of addresses, a
//! subject, and a message to a [`Notifier`]. Everything past that point —
//! transport, sender configuration, retries — belongs to the implementation,
//! not to the domain.

pub mod log;
pub mod notifier;
pub mod recording;

pub use log::TracingNotifier;
pub use notifier::{Delivery, Notifier, NotifyError};
pub use recording::RecordingNotifier;
