//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose listing, detail, featured and theme use cases to Dart via FRB.
//! - Hold the per-process session: loaded catalog, running carousel and
//!   theme controller.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Filter state is owned by the caller and passed in on every listing call.
//! - Before `catalog_load` the listing reports `loaded = false`, which is
//!   distinct from a loaded catalog with zero matches.

use folio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    try_load_records_from_path, CatalogService, DetailView, FeaturedCarousel, FeaturedRotation,
    FeaturedSlide, FilePreferenceStore, FilterState, FolioConfig, ListingState, ProjectCard,
    ProjectDetail, StaticProjectRepository, Theme, ThemeController, ThemeOrigin,
};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static CONFIG: OnceLock<FolioConfig> = OnceLock::new();
static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

#[derive(Default)]
struct Session {
    catalog: Option<CatalogService<StaticProjectRepository>>,
    carousel: Option<FeaturedCarousel>,
    theme: Option<ThemeController<FilePreferenceStore>>,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Listing filter as edited by the Dart controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilterInput {
    pub query: String,
    /// Empty string means "All".
    pub domain: String,
    /// Empty string means "All".
    pub language: String,
    pub has_github: bool,
    pub has_demo: bool,
    pub has_paper: bool,
    pub selected_tags: Vec<String>,
}

/// Listing card shaped for direct rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardItem {
    pub slug: String,
    pub title: String,
    pub domain: String,
    pub year: i32,
    pub blurb: String,
    pub cover_image: Option<String>,
    pub chips: Vec<String>,
    pub github_href: Option<String>,
    pub demo_href: Option<String>,
    pub paper_href: Option<String>,
    pub detail_path: String,
}

/// Listing response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    /// `false` until a catalog was loaded in this session.
    pub loaded: bool,
    pub items: Vec<ProjectCardItem>,
    /// Number of items after filtering.
    pub showing: u32,
    /// Number of records in the catalog.
    pub total: u32,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Catalog load response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoadResponse {
    pub ok: bool,
    pub total: u32,
    pub source_path: String,
    pub message: String,
}

/// Distinct filter values offered by the listing controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFacetsResponse {
    pub domains: Vec<String>,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSectionItem {
    pub title: String,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStatItem {
    pub label: String,
    pub value: String,
}

/// Detail page payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailItem {
    pub slug: String,
    pub title: String,
    pub blurb: String,
    pub domain: String,
    pub year: i32,
    pub cover_image: Option<String>,
    pub github_href: Option<String>,
    pub demo_href: Option<String>,
    pub paper_href: Option<String>,
    pub highlights: Vec<String>,
    pub stats: Vec<ProjectStatItem>,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub skills: Vec<String>,
    pub images: Vec<String>,
    pub sections: Vec<ProjectSectionItem>,
    /// `true` when `sections` holds the overview placeholder.
    pub is_overview: bool,
}

/// Detail response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailResponse {
    pub found: bool,
    pub project: Option<ProjectDetailItem>,
    /// Page title; the not-found title when `found` is `false`.
    pub title: String,
    pub back_path: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedSlideItem {
    pub slug: String,
    pub title: String,
    pub blurb: String,
    pub domain: String,
    pub year: i32,
    pub cover_image: Option<String>,
    pub detail_path: String,
}

/// Carousel state for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturedSnapshot {
    pub slides: Vec<FeaturedSlideItem>,
    pub index: u32,
    /// One-based position, `None` when there are no slides.
    pub position: Option<u32>,
    pub paused: bool,
    pub transitioning: bool,
    /// `true` while an automatic advance is scheduled.
    pub scheduled: bool,
}

/// Theme response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResponse {
    /// `light` or `dark`.
    pub theme: String,
    /// `stored` or `ambient`.
    pub origin: String,
}

/// Loads the projects source into the session catalog.
///
/// `path = None` uses `FOLIO_PROJECTS_PATH` or the default content path.
///
/// # FFI contract
/// - Sync call; reads one file.
/// - A failed load installs an empty catalog and reports `ok = false`.
/// - Replaces any previous catalog and stops a running carousel.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_load(path: Option<String>) -> CatalogLoadResponse {
    let source = path
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| resolve_config().projects_path.clone());

    let (records, ok, message) = match try_load_records_from_path(&source) {
        Ok(records) => {
            let message = format!("Loaded {} project(s).", records.len());
            (records, true, message)
        }
        Err(err) => {
            warn!("event=catalog_load module=ffi status=error error={err}");
            (Vec::new(), false, format!("catalog_load failed: {err}"))
        }
    };

    let catalog = CatalogService::new(StaticProjectRepository::new(records));
    let total = to_u32(catalog.total());
    with_session(|session| {
        session.carousel = None;
        session.catalog = Some(catalog);
    });
    info!("event=catalog_load module=ffi status=ok total={total}");

    CatalogLoadResponse {
        ok,
        total,
        source_path: source.display().to_string(),
        message,
    }
}

/// Returns filtered, newest-first listing cards.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn projects_list(filter: ProjectFilterInput) -> ProjectListResponse {
    let filter = to_filter_state(filter);
    with_session(|session| {
        let repo = session.catalog.as_ref().map(CatalogService::repository);
        match ListingState::from_repository(repo, &filter) {
            ListingState::NotLoaded => ProjectListResponse {
                loaded: false,
                items: Vec::new(),
                showing: 0,
                total: 0,
                message: "Projects are not loaded.".to_string(),
            },
            ListingState::Ready(projection) => {
                let items = projection
                    .items
                    .iter()
                    .map(|record| to_card_item(ProjectCard::from_record(record)))
                    .collect::<Vec<_>>();
                let message = if items.is_empty() {
                    "No projects match these filters.".to_string()
                } else {
                    format!("Showing {} of {}.", projection.showing(), projection.total)
                };
                ProjectListResponse {
                    loaded: true,
                    showing: to_u32(projection.showing()),
                    total: to_u32(projection.total),
                    items,
                    message,
                }
            }
        }
    })
}

/// Distinct domains, languages and tags of the loaded catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn project_filter_facets() -> ProjectFacetsResponse {
    with_session(|session| match &session.catalog {
        Some(catalog) => {
            let facets = catalog.facets();
            ProjectFacetsResponse {
                domains: facets.domains,
                languages: facets.languages,
                tags: facets.tags,
            }
        }
        None => ProjectFacetsResponse::default(),
    })
}

/// Typeahead suggestions for the tag input.
#[flutter_rust_bridge::frb(sync)]
pub fn project_tag_suggestions(text: String, selected_tags: Vec<String>) -> Vec<String> {
    with_session(|session| {
        session
            .catalog
            .as_ref()
            .map(|catalog| catalog.tag_suggestions(&text, &selected_tags))
            .unwrap_or_default()
    })
}

/// Resolves a detail route slug.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Unknown slugs return `found = false` with a back path, never an error.
#[flutter_rust_bridge::frb(sync)]
pub fn project_detail(slug: String) -> ProjectDetailResponse {
    with_session(|session| {
        let view = match &session.catalog {
            Some(catalog) => catalog.detail(&slug),
            None => DetailView::resolve(&StaticProjectRepository::empty(), &slug),
        };
        match view {
            DetailView::Found(detail) => ProjectDetailResponse {
                found: true,
                title: detail.title.clone(),
                back_path: detail.back_path.clone(),
                message: String::new(),
                project: Some(to_detail_item(*detail)),
            },
            DetailView::NotFound(missing) => ProjectDetailResponse {
                found: false,
                project: None,
                message: format!("No project with slug `{}`.", missing.requested_slug),
                title: missing.title,
                back_path: missing.back_path,
            },
        }
    })
}

/// Starts (or restarts) the featured carousel over the loaded catalog.
///
/// # FFI contract
/// - Spawns one background timer thread when there is something to rotate.
/// - Without a catalog the snapshot is empty and nothing is scheduled.
#[flutter_rust_bridge::frb(sync)]
pub fn featured_start() -> FeaturedSnapshot {
    let interval = resolve_config().rotation_interval;
    with_session(|session| {
        let rotation = session
            .catalog
            .as_ref()
            .map(CatalogService::featured_rotation)
            .unwrap_or_default();
        // Cancel the old timer before the new one starts.
        session.carousel = None;
        let carousel = FeaturedCarousel::start(rotation, interval);
        let snapshot = to_snapshot(&carousel);
        session.carousel = Some(carousel);
        snapshot
    })
}

/// Current carousel state without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn featured_snapshot() -> FeaturedSnapshot {
    with_carousel(|_| ())
}

/// Advances one slide and restarts the interval.
#[flutter_rust_bridge::frb(sync)]
pub fn featured_next() -> FeaturedSnapshot {
    with_carousel(|carousel| {
        carousel.next();
    })
}

/// Steps back one slide and restarts the interval.
#[flutter_rust_bridge::frb(sync)]
pub fn featured_prev() -> FeaturedSnapshot {
    with_carousel(|carousel| {
        carousel.previous();
    })
}

/// Jumps to `index`, wrapping modulo the slide count.
#[flutter_rust_bridge::frb(sync)]
pub fn featured_go_to(index: u32) -> FeaturedSnapshot {
    with_carousel(|carousel| {
        carousel.go_to(index as usize);
    })
}

/// Pauses on hover, resumes on leave.
#[flutter_rust_bridge::frb(sync)]
pub fn featured_set_paused(paused: bool) -> FeaturedSnapshot {
    with_carousel(|carousel| carousel.set_paused(paused))
}

/// Clears the transition flag once the slide animation finished.
#[flutter_rust_bridge::frb(sync)]
pub fn featured_settle() -> FeaturedSnapshot {
    with_carousel(FeaturedCarousel::settle_transition)
}

/// Cancels the carousel timer, e.g. when the home page unmounts.
#[flutter_rust_bridge::frb(sync)]
pub fn featured_stop() {
    with_session(|session| session.carousel = None);
}

/// Reads the stored theme once, falling back to the platform preference.
///
/// Repeated calls return the session theme without re-reading storage.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_init(system_prefers_dark: bool) -> ThemeResponse {
    with_session(|session| {
        let controller = session
            .theme
            .get_or_insert_with(|| new_theme_controller(system_prefers_dark));
        to_theme_response(controller)
    })
}

/// Flips and persists the theme. Persist failures keep the in-session value.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_toggle() -> ThemeResponse {
    with_session(|session| {
        let controller = session
            .theme
            .get_or_insert_with(|| new_theme_controller(false));
        controller.toggle();
        to_theme_response(controller)
    })
}

fn resolve_config() -> &'static FolioConfig {
    CONFIG.get_or_init(FolioConfig::from_env)
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> T {
    let mut session = lock_session();
    f(&mut session)
}

fn lock_session() -> MutexGuard<'static, Session> {
    SESSION
        .get_or_init(|| Mutex::new(Session::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn with_carousel(f: impl FnOnce(&mut FeaturedCarousel)) -> FeaturedSnapshot {
    with_session(|session| match session.carousel.as_mut() {
        Some(carousel) => {
            f(carousel);
            to_snapshot(carousel)
        }
        None => FeaturedSnapshot::default(),
    })
}

fn new_theme_controller(system_prefers_dark: bool) -> ThemeController<FilePreferenceStore> {
    let store = FilePreferenceStore::new(resolve_config().preferences_path.clone());
    ThemeController::initialize(store, Theme::from_prefers_dark(system_prefers_dark))
}

fn to_filter_state(input: ProjectFilterInput) -> FilterState {
    let mut filter = FilterState::new();
    filter.set_query(input.query);
    filter.set_domain(input.domain);
    filter.set_language(input.language);
    filter.has_github = input.has_github;
    filter.has_demo = input.has_demo;
    filter.has_paper = input.has_paper;
    for tag in input.selected_tags {
        filter.add_tag(tag);
    }
    filter
}

fn to_card_item(card: ProjectCard) -> ProjectCardItem {
    ProjectCardItem {
        slug: card.slug,
        title: card.title,
        domain: card.domain,
        year: card.year,
        blurb: card.blurb_preview,
        cover_image: card.cover_image,
        chips: card.chips,
        github_href: card.github_href,
        demo_href: card.demo_href,
        paper_href: card.paper_href,
        detail_path: card.detail_path,
    }
}

fn to_detail_item(detail: ProjectDetail) -> ProjectDetailItem {
    let is_overview = matches!(detail.body, folio_core::DetailBody::Overview(_));
    let sections = detail
        .body
        .sections()
        .iter()
        .map(|section| ProjectSectionItem {
            title: section.title.clone(),
            body: section.body.clone(),
        })
        .collect();
    ProjectDetailItem {
        slug: detail.slug,
        title: detail.title,
        blurb: detail.blurb,
        domain: detail.domain,
        year: detail.year,
        cover_image: detail.cover_image,
        github_href: detail.github_href,
        demo_href: detail.demo_href,
        paper_href: detail.paper_href,
        highlights: detail.highlights,
        stats: detail
            .stats
            .into_iter()
            .map(|stat| ProjectStatItem {
                label: stat.label,
                value: stat.value,
            })
            .collect(),
        languages: detail.languages,
        tools: detail.tools,
        skills: detail.skills,
        images: detail.gallery.images().to_vec(),
        sections,
        is_overview,
    }
}

fn to_snapshot(carousel: &FeaturedCarousel) -> FeaturedSnapshot {
    let rotation: FeaturedRotation = carousel.snapshot();
    FeaturedSnapshot {
        slides: rotation.slides().iter().map(to_slide_item).collect(),
        index: to_u32(rotation.index()),
        position: rotation.position().map(to_u32),
        paused: rotation.is_paused(),
        transitioning: rotation.is_transitioning(),
        scheduled: carousel.is_scheduled(),
    }
}

fn to_slide_item(slide: &FeaturedSlide) -> FeaturedSlideItem {
    FeaturedSlideItem {
        slug: slide.slug.clone(),
        title: slide.title.clone(),
        blurb: slide.blurb.clone(),
        domain: slide.domain.clone(),
        year: slide.year,
        cover_image: slide.cover_image.clone(),
        detail_path: slide.detail_path.clone(),
    }
}

fn to_theme_response(controller: &ThemeController<FilePreferenceStore>) -> ThemeResponse {
    ThemeResponse {
        theme: controller.current().as_str().to_string(),
        origin: match controller.origin() {
            ThemeOrigin::Stored => "stored",
            ThemeOrigin::Ambient => "ambient",
        }
        .to_string(),
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
