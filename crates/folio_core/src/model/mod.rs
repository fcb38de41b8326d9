//! Static portfolio content model.
//!
//! # Responsibility
//! - Define the canonical project record shared by listing, detail and
//!   featured views.
//! - Decode loosely-shaped JSON into fully-populated records at the boundary.
//!
//! # Invariants
//! - Every record is identified by a stable `slug`.
//! - Records are immutable once loaded; views are pure projections.

pub mod project;
