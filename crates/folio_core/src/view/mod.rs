//! Presentation-ready projections of project records.
//!
//! # Responsibility
//! - Shape records into card, detail and gallery view models.
//! - Keep rendering decisions (chip selection, link fallbacks, not-found
//!   state) out of the UI layer.

pub mod card;
pub mod detail;
pub mod gallery;
