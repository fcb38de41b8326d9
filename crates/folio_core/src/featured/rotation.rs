//! Featured rotation state machine.
//!
//! # Invariants
//! - `index < len()` whenever the rotation is non-empty.
//! - Navigation never changes the slide sequence, only the cursor.
//! - Every cursor move marks a transition until the presentation layer
//!   settles it.

use crate::model::project::ProjectRecord;

/// Default automatic advance interval.
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 4_500;

/// Minimal record projection shown on one carousel slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedSlide {
    pub slug: String,
    pub title: String,
    pub blurb: String,
    pub domain: String,
    pub year: i32,
    pub cover_image: Option<String>,
    pub detail_path: String,
}

impl FeaturedSlide {
    /// Projects one record onto a slide.
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            slug: record.slug.clone(),
            title: record.title.clone(),
            blurb: record.blurb.clone(),
            domain: record.domain.clone(),
            year: record.year,
            cover_image: record.cover_image.clone(),
            detail_path: record.detail_path(),
        }
    }
}

/// Featured records ordered by `featured_order` ascending.
///
/// Records without an order sort after every ordered record; ties keep source
/// order.
pub fn select_featured(records: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    let mut featured = records
        .iter()
        .filter(|record| record.featured)
        .collect::<Vec<_>>();
    featured.sort_by_key(|record| (record.featured_order.is_none(), record.featured_order));
    featured
}

/// Cursor, pause flag and transition flag over a fixed slide sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturedRotation {
    slides: Vec<FeaturedSlide>,
    index: usize,
    paused: bool,
    transitioning: bool,
}

impl FeaturedRotation {
    /// Creates a rotation positioned on the first slide.
    pub fn new(slides: Vec<FeaturedSlide>) -> Self {
        Self {
            slides,
            index: 0,
            paused: false,
            transitioning: false,
        }
    }

    /// Builds the rotation from the full record set.
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        Self::new(
            select_featured(records)
                .into_iter()
                .map(FeaturedSlide::from_record)
                .collect(),
        )
    }

    /// Slides in display order.
    pub fn slides(&self) -> &[FeaturedSlide] {
        &self.slides
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// `true` when nothing is featured.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Zero-based cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based position for "k/N" indicators; `None` when empty.
    pub fn position(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index + 1)
    }

    /// Slide under the cursor.
    pub fn active(&self) -> Option<&FeaturedSlide> {
        self.slides.get(self.index)
    }

    /// `true` while automatic advancement is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspends or resumes automatic advancement.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// `true` between a cursor move and `settle_transition`.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Marks the current slide transition as finished.
    pub fn settle_transition(&mut self) {
        self.transitioning = false;
    }

    /// Whether automatic advancement should be scheduled at all.
    pub fn wants_timer(&self) -> bool {
        !self.is_empty() && !self.paused
    }

    /// Moves to `target`, wrapping modulo the slide count.
    ///
    /// Returns the new index, or `None` when there are no slides.
    pub fn go_to(&mut self, target: usize) -> Option<usize> {
        let count = self.len();
        if count == 0 {
            return None;
        }
        self.index = target % count;
        self.transitioning = true;
        Some(self.index)
    }

    /// Advances one slide, wrapping to the first.
    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.index.wrapping_add(1))
    }

    /// Steps back one slide, wrapping to the last.
    pub fn previous(&mut self) -> Option<usize> {
        let count = self.len();
        if count == 0 {
            return None;
        }
        self.go_to(self.index + count - 1)
    }

    /// Automatic advance. Does nothing while paused or empty.
    pub fn tick(&mut self) -> bool {
        if !self.wants_timer() {
            return false;
        }
        self.next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{FeaturedRotation, FeaturedSlide};

    fn slide(slug: &str) -> FeaturedSlide {
        FeaturedSlide {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            blurb: String::new(),
            domain: String::new(),
            year: 2024,
            cover_image: None,
            detail_path: format!("/projects/{slug}"),
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut rotation = FeaturedRotation::new(vec![slide("a"), slide("b"), slide("c")]);
        assert_eq!(rotation.previous(), Some(2));
        assert_eq!(rotation.active().unwrap().slug, "c");
    }

    #[test]
    fn jump_index_wraps_modulo_length() {
        let mut rotation = FeaturedRotation::new(vec![slide("a"), slide("b")]);
        assert_eq!(rotation.go_to(5), Some(1));
        assert_eq!(rotation.position(), Some(2));
    }

    #[test]
    fn navigation_marks_transition_until_settled() {
        let mut rotation = FeaturedRotation::new(vec![slide("a"), slide("b")]);
        assert!(!rotation.is_transitioning());
        rotation.next();
        assert!(rotation.is_transitioning());
        rotation.settle_transition();
        assert!(!rotation.is_transitioning());
    }
}
