//! Ephemeral listing filter state.
//!
//! # Responsibility
//! - Carry the composite constraint set edited by listing controls.
//! - Offer the mutations the listing controls perform.
//!
//! # Invariants
//! - A fresh state is empty and passes every record.
//! - `selected_tags` never holds duplicates and keeps selection order for
//!   chip display.
//! - `clear` restores the fresh state.

/// Composite filter applied to the record collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free text; matched case-insensitively after trimming.
    pub query: String,
    /// Exact domain match; empty means no constraint.
    pub domain: String,
    /// Exact member of `languages`; empty means no constraint.
    pub language: String,
    pub has_github: bool,
    pub has_demo: bool,
    /// Satisfied by `paper` or the legacy `writeup` link.
    pub has_paper: bool,
    /// Every tag must appear in `skills ∪ tools`.
    pub selected_tags: Vec<String>,
}

impl FilterState {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Selects a domain; empty clears the constraint.
    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = domain.into();
    }

    /// Selects a language; empty clears the constraint.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Flips the "has GitHub link" constraint.
    pub fn toggle_github(&mut self) {
        self.has_github = !self.has_github;
    }

    /// Flips the "has demo link" constraint.
    pub fn toggle_demo(&mut self) {
        self.has_demo = !self.has_demo;
    }

    /// Flips the "has paper link" constraint.
    pub fn toggle_paper(&mut self) {
        self.has_paper = !self.has_paper;
    }

    /// Adds one tag to the conjunctive tag set.
    ///
    /// Returns `false` when the tag is blank or already selected.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if tag.is_empty() || self.is_tag_selected(&tag) {
            return false;
        }
        self.selected_tags.push(tag);
        true
    }

    /// Removes one tag. Returns `false` when it was not selected.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.selected_tags.len();
        self.selected_tags.retain(|selected| selected != tag);
        self.selected_tags.len() != before
    }

    /// `true` when `tag` is part of the tag constraint.
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|selected| selected == tag)
    }

    /// Resets every constraint to its inactive value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Query text as used for matching (trimmed).
    pub fn active_query(&self) -> &str {
        self.query.trim()
    }

    /// `true` when no sub-filter is active.
    pub fn is_empty(&self) -> bool {
        self.active_query().is_empty()
            && self.domain.is_empty()
            && self.language.is_empty()
            && !self.has_github
            && !self.has_demo
            && !self.has_paper
            && self.selected_tags.is_empty()
    }
}
