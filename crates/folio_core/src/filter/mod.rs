//! Listing filter state and predicates.
//!
//! # Responsibility
//! - Hold the user-chosen listing constraints for one session.
//! - Decide whether one record survives those constraints.
//!
//! # Invariants
//! - Every active sub-filter is conjunctive; inactive ones impose nothing.
//! - Predicates are pure and never fail on missing optional data.

pub mod predicate;
pub mod state;
