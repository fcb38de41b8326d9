//! Catalog use-case services.
//!
//! # Responsibility
//! - Derive listing projections, facets and detail views from the record
//!   store.
//! - Keep FFI/CLI layers decoupled from filtering and sorting details.

pub mod catalog_service;
pub mod projection;
