//! Core domain logic for the Folio portfolio site.
//! This crate is the single source of truth for listing, detail, featured
//! and theme behavior; UI hosts only render what it returns.

pub mod config;
pub mod featured;
pub mod filter;
pub mod logging;
pub mod model;
pub mod repo;
pub mod route;
pub mod service;
pub mod theme;
pub mod view;

pub use config::FolioConfig;
pub use featured::carousel::FeaturedCarousel;
pub use featured::rotation::{
    select_featured, FeaturedRotation, FeaturedSlide, DEFAULT_ROTATION_INTERVAL_MS,
};
pub use featured::timer::{ScheduledTick, TickControl};
pub use filter::predicate::{matches, matches_query, search_haystack};
pub use filter::state::FilterState;
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::project::{ProjectLinks, ProjectRecord, ProjectSection, ProjectSlug, ProjectStat};
pub use repo::project_repo::{
    load_records_from_path, load_records_from_str, records_from_value, try_load_records_from_path,
    try_load_records_from_str, LoadError, LoadResult, ProjectRepository, StaticProjectRepository,
};
pub use route::Route;
pub use service::catalog_service::{CatalogService, FilterFacets, TAG_SUGGESTION_LIMIT};
pub use service::projection::{project_records, ListingState, Projection};
pub use theme::preference::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore, Theme,
    ThemeController, ThemeOrigin, ThemeSink,
};
pub use view::card::ProjectCard;
pub use view::detail::{DetailBody, DetailView, NotFoundView, ProjectDetail};
pub use view::gallery::GalleryState;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
