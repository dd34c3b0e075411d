//! League domain module (the aggregate and its derived queries).
//!
//! This crate contains the league aggregate: canonical team and competition
//! storage plus the relationship queries computed over it, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod league;

pub use league::League;
