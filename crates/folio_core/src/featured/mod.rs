//! Featured project rotation for the home page.
//!
//! # Responsibility
//! - Select and order the featured subset of records.
//! - Keep the carousel cursor, pause and transition state.
//! - Drive automatic advancement with a cancelable scheduled task.
//!
//! # Invariants
//! - Cursor arithmetic wraps modulo the number of featured slides.
//! - An empty featured subset performs no timer work.

pub mod carousel;
pub mod rotation;
pub mod timer;
