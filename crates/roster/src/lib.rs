//! Roster domain module (members and teams).
//!
//! This crate contains membership rules for teams and their members,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod member;
pub mod team;

pub use member::Member;
pub use team::Team;
