//! Light/dark display preference.
//!
//! # Responsibility
//! - Read the stored preference once per session, falling back to the
//!   ambient platform preference.
//! - Apply the active theme through an injected sink and persist toggles.
//!
//! # Invariants
//! - Storage failures never prevent in-session toggling.

pub mod preference;
