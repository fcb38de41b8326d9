//! Read-only record store over static portfolio content.
//!
//! # Responsibility
//! - Decode the static projects source into an ordered record list.
//! - Provide slug lookup for detail views.
//!
//! # Invariants
//! - Loading never fails from a caller's point of view: malformed or absent
//!   sources produce an empty list.
//! - Slugs are unique inside a repository; the first occurrence wins.

pub mod project_repo;
