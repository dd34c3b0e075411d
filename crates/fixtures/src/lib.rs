//! Fixtures domain module (scheduled competitions).
//!
//! This crate contains the rules for a competition between two teams,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod competition;

pub use competition::Competition;
