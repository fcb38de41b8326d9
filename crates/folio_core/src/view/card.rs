//! Listing card view model.
//!
//! # Invariants
//! - Chips are drawn from domain, then up to two languages, two tools and two
//!   skills; empty and repeated values are dropped; at most seven are kept.
//! - `paper_href` falls back to the legacy `writeup` link.

use crate::model::project::ProjectRecord;
use once_cell::sync::Lazy;
use regex::Regex;

const CHIPS_PER_GROUP: usize = 2;
const MAX_CARD_CHIPS: usize = 7;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One project rendered as a listing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub domain: String,
    pub year: i32,
    /// Blurb with whitespace runs collapsed to single spaces.
    pub blurb_preview: String,
    pub cover_image: Option<String>,
    pub chips: Vec<String>,
    pub github_href: Option<String>,
    pub demo_href: Option<String>,
    pub paper_href: Option<String>,
    /// Route of the detail page opened when the card is activated.
    pub detail_path: String,
}

impl ProjectCard {
    /// Shapes one record as a listing card.
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            slug: record.slug.clone(),
            title: record.title.clone(),
            domain: record.domain.clone(),
            year: record.year,
            blurb_preview: collapse_whitespace(&record.blurb),
            cover_image: record.cover_image.clone(),
            chips: card_chips(record),
            github_href: record.links.github.clone(),
            demo_href: record.links.demo.clone(),
            paper_href: record.links.paper_href().map(str::to_string),
            detail_path: record.detail_path(),
        }
    }
}

/// Picks the summary chips shown on a card.
pub fn card_chips(record: &ProjectRecord) -> Vec<String> {
    let candidates = std::iter::once(&record.domain)
        .chain(record.languages.iter().take(CHIPS_PER_GROUP))
        .chain(record.tools.iter().take(CHIPS_PER_GROUP))
        .chain(record.skills.iter().take(CHIPS_PER_GROUP));

    let mut chips: Vec<String> = Vec::with_capacity(MAX_CARD_CHIPS);
    for candidate in candidates {
        if chips.len() == MAX_CARD_CHIPS {
            break;
        }
        if !candidate.is_empty() && !chips.contains(candidate) {
            chips.push(candidate.clone());
        }
    }
    chips
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{card_chips, ProjectCard};
    use crate::model::project::ProjectRecord;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn chips_take_two_per_group_after_domain() {
        let mut record = ProjectRecord::new("c", "Card", 2024);
        record.domain = "FinTech".to_string();
        record.languages = strings(&["Python", "SQL", "R"]);
        record.tools = strings(&["Docker", "Azure", "dbt"]);
        record.skills = strings(&["Calibration", "Forecasting", "MLOps"]);

        assert_eq!(
            card_chips(&record),
            strings(&[
                "FinTech",
                "Python",
                "SQL",
                "Docker",
                "Azure",
                "Calibration",
                "Forecasting"
            ])
        );
    }

    #[test]
    fn chips_drop_empty_domain_and_repeats() {
        let mut record = ProjectRecord::new("c", "Card", 2024);
        record.languages = strings(&["Python"]);
        record.skills = strings(&["Python", "NLP"]);
        assert_eq!(card_chips(&record), strings(&["Python", "NLP"]));
    }

    #[test]
    fn card_uses_writeup_when_paper_missing_and_collapses_blurb() {
        let mut record = ProjectRecord::new("legacy", "Legacy", 2021);
        record.blurb = "  multi\n line\tblurb ".to_string();
        record.links.writeup = Some("https://example.com/writeup".to_string());

        let card = ProjectCard::from_record(&record);
        assert_eq!(card.paper_href.as_deref(), Some("https://example.com/writeup"));
        assert_eq!(card.blurb_preview, "multi line blurb");
        assert_eq!(card.detail_path, "/projects/legacy");
    }
}
