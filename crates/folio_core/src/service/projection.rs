//! Filtered, sorted listing projection.
//!
//! # Responsibility
//! - Apply the filter predicate to the full record set.
//! - Order survivors newest first.
//!
//! # Invariants
//! - Sort is stable and descending by `year`; ties keep source order.
//! - Projection is recomputed from scratch on every call; no caching.
//! - An empty projection is distinct from [`ListingState::NotLoaded`].

use crate::filter::predicate::matches;
use crate::filter::state::FilterState;
use crate::model::project::ProjectRecord;
use crate::repo::project_repo::ProjectRepository;

/// Records visible for one filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    /// Surviving records, newest first.
    pub items: Vec<&'a ProjectRecord>,
    /// Size of the unfiltered record set.
    pub total: usize,
}

impl Projection<'_> {
    /// Number of visible records.
    pub fn showing(&self) -> usize {
        self.items.len()
    }

    /// `true` when no record survived the filter.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slugs of the visible records in display order.
    pub fn slugs(&self) -> Vec<&str> {
        self.items.iter().map(|record| record.slug.as_str()).collect()
    }
}

/// Listing lifecycle as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState<'a> {
    /// Content has not been loaded yet.
    NotLoaded,
    /// Content is loaded; the projection may still be empty.
    Ready(Projection<'a>),
}

impl<'a> ListingState<'a> {
    /// Builds the listing state for an optional loaded repository.
    pub fn from_repository<R: ProjectRepository>(repo: Option<&'a R>, filter: &FilterState) -> Self {
        match repo {
            Some(repo) => Self::Ready(project_records(repo.all(), filter)),
            None => Self::NotLoaded,
        }
    }

    /// `true` once content is loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Filters `records` by `filter` and sorts the result by year, newest first.
pub fn project_records<'a>(records: &'a [ProjectRecord], filter: &FilterState) -> Projection<'a> {
    let mut items = records
        .iter()
        .filter(|record| matches(record, filter))
        .collect::<Vec<_>>();
    // `sort_by` is stable, so equal years keep encounter order.
    items.sort_by(|left, right| right.year.cmp(&left.year));
    Projection {
        items,
        total: records.len(),
    }
}
