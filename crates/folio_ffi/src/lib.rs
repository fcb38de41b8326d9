//! Flutter-facing bindings over `folio_core`.

pub mod api;
