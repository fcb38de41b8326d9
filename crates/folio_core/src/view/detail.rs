//! Project detail view model.
//!
//! # Responsibility
//! - Resolve a route slug into either a detail model or a defined not-found
//!   state.
//! - Supply an overview body when a record has no narrative sections.
//!
//! # Invariants
//! - A missing slug is a value (`DetailView::NotFound`), never an error.
//! - The not-found state always carries a path back to the listing.

use crate::model::project::{ProjectRecord, ProjectSection, ProjectStat};
use crate::repo::project_repo::ProjectRepository;
use crate::view::gallery::GalleryState;

/// Listing route used by back links.
pub const LISTING_PATH: &str = "/projects";
pub const NOT_FOUND_TITLE: &str = "Project not found";
pub const OVERVIEW_TITLE: &str = "Overview";
const OVERVIEW_PLACEHOLDER: &str =
    "Add a `sections` array to this project in the projects file to render a full write-up.";

/// Result of resolving a detail route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Found(Box<ProjectDetail>),
    NotFound(NotFoundView),
}

impl DetailView {
    /// Looks `slug` up in `repo` and shapes the result.
    pub fn resolve<R: ProjectRepository>(repo: &R, slug: &str) -> Self {
        match repo.find_by_slug(slug) {
            Some(record) => Self::Found(Box::new(ProjectDetail::from_record(record))),
            None => Self::NotFound(NotFoundView::for_slug(slug)),
        }
    }

    /// `true` when the slug resolved to a record.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Detail model when found.
    pub fn project(&self) -> Option<&ProjectDetail> {
        match self {
            Self::Found(detail) => Some(detail.as_ref()),
            Self::NotFound(_) => None,
        }
    }
}

/// Rendered when no record matches the requested slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    pub requested_slug: String,
    pub title: String,
    pub back_path: String,
}

impl NotFoundView {
    /// Not-found state for `slug`.
    pub fn for_slug(slug: &str) -> Self {
        Self {
            requested_slug: slug.to_string(),
            title: NOT_FOUND_TITLE.to_string(),
            back_path: LISTING_PATH.to_string(),
        }
    }
}

/// Narrative body of a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody {
    /// The record's own sections, in source order.
    Sections(Vec<ProjectSection>),
    /// Placeholder shown when the record has no sections.
    Overview(ProjectSection),
}

impl DetailBody {
    /// Sections to render, in order.
    pub fn sections(&self) -> &[ProjectSection] {
        match self {
            Self::Sections(sections) => sections,
            Self::Overview(section) => std::slice::from_ref(section),
        }
    }
}

/// Fully shaped detail page for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
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
    pub stats: Vec<ProjectStat>,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub skills: Vec<String>,
    pub gallery: GalleryState,
    pub body: DetailBody,
    pub back_path: String,
}

impl ProjectDetail {
    /// Shapes one record as a detail page.
    pub fn from_record(record: &ProjectRecord) -> Self {
        let body = if record.sections.is_empty() {
            DetailBody::Overview(ProjectSection {
                title: OVERVIEW_TITLE.to_string(),
                body: vec![OVERVIEW_PLACEHOLDER.to_string()],
            })
        } else {
            DetailBody::Sections(record.sections.clone())
        };

        Self {
            slug: record.slug.clone(),
            title: record.title.clone(),
            blurb: record.blurb.clone(),
            domain: record.domain.clone(),
            year: record.year,
            cover_image: record.cover_image.clone(),
            github_href: record.links.github.clone(),
            demo_href: record.links.demo.clone(),
            paper_href: record.links.paper_href().map(str::to_string),
            highlights: record.highlights.clone(),
            stats: record.stats.clone(),
            languages: record.languages.clone(),
            tools: record.tools.clone(),
            skills: record.skills.clone(),
            gallery: GalleryState::new(record.images.clone()),
            body,
            back_path: LISTING_PATH.to_string(),
        }
    }
}
