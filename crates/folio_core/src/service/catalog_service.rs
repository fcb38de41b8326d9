//! Project catalog use-case service.
//!
//! # Responsibility
//! - Provide listing, detail, facet and featured entry points over one
//!   repository.
//! - Derive typeahead suggestions for the skill/tool tag filter.
//!
//! # Invariants
//! - The service never mutates the repository.
//! - Facet lists are duplicate-free, skip empty values and are sorted
//!   case-insensitively with a case-sensitive tiebreak.
//! - Tag suggestions never include already-selected tags.

use crate::featured::rotation::{select_featured, FeaturedRotation};
use crate::filter::state::FilterState;
use crate::model::project::ProjectRecord;
use crate::repo::project_repo::ProjectRepository;
use crate::service::projection::{project_records, Projection};
use crate::view::card::ProjectCard;
use crate::view::detail::DetailView;
use log::debug;
use std::collections::BTreeSet;

/// Upper bound on typeahead suggestions.
pub const TAG_SUGGESTION_LIMIT: usize = 8;

/// Distinct values offered by the listing filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterFacets {
    pub domains: Vec<String>,
    pub languages: Vec<String>,
    /// Union of every record's skills and tools.
    pub tags: Vec<String>,
}

/// Catalog facade over a repository implementation.
pub struct CatalogService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> CatalogService<R> {
    /// Creates a service over `repo`.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Number of loaded records.
    pub fn total(&self) -> usize {
        self.repo.len()
    }

    /// Filtered, newest-first projection for `filter`.
    pub fn listing(&self, filter: &FilterState) -> Projection<'_> {
        let projection = project_records(self.repo.all(), filter);
        debug!(
            "event=catalog_listing module=service status=ok showing={} total={}",
            projection.showing(),
            projection.total
        );
        projection
    }

    /// Listing shaped as cards, in projection order.
    pub fn cards(&self, filter: &FilterState) -> Vec<ProjectCard> {
        self.listing(filter)
            .items
            .into_iter()
            .map(ProjectCard::from_record)
            .collect()
    }

    /// Detail page for `slug`, or the not-found state.
    pub fn detail(&self, slug: &str) -> DetailView {
        let view = DetailView::resolve(&self.repo, slug);
        if !view.is_found() {
            debug!("event=catalog_detail module=service status=not_found slug={slug}");
        }
        view
    }

    /// Distinct domains, languages and tags across all records.
    pub fn facets(&self) -> FilterFacets {
        let records = self.repo.all();
        FilterFacets {
            domains: sorted_unique(records.iter().map(|record| record.domain.as_str())),
            languages: sorted_unique(
                records
                    .iter()
                    .flat_map(|record| record.languages.iter().map(String::as_str)),
            ),
            tags: sorted_unique(records.iter().flat_map(tag_values)),
        }
    }

    /// Tags containing `text` (case-insensitive), excluding `selected`.
    ///
    /// Blank input yields no suggestions.
    pub fn tag_suggestions(&self, text: &str, selected: &[String]) -> Vec<String> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.facets()
            .tags
            .into_iter()
            .filter(|tag| tag.to_lowercase().contains(&needle))
            .filter(|tag| !selected.contains(tag))
            .take(TAG_SUGGESTION_LIMIT)
            .collect()
    }

    /// Featured records in display order.
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        select_featured(self.repo.all())
    }

    /// Fresh rotation over the featured subset.
    pub fn featured_rotation(&self) -> FeaturedRotation {
        FeaturedRotation::from_records(self.repo.all())
    }
}

fn tag_values(record: &ProjectRecord) -> impl Iterator<Item = &str> {
    record
        .skills
        .iter()
        .chain(record.tools.iter())
        .map(String::as_str)
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let unique = values
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>();
    let mut out = unique.into_iter().map(str::to_string).collect::<Vec<_>>();
    out.sort_by(|left, right| {
        left.to_lowercase()
            .cmp(&right.to_lowercase())
            .then_with(|| left.cmp(right))
    });
    out
}
