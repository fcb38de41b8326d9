//! Per-record filter predicates.
//!
//! # Invariants
//! - `matches(record, &FilterState::default())` is always `true`.
//! - Text matching is case-insensitive substring search over
//!   [`search_haystack`].
//! - Tag matching is exact and conjunctive over `skills ∪ tools`.

use crate::filter::state::FilterState;
use crate::model::project::ProjectRecord;

/// Returns whether `record` survives every active constraint in `filter`.
pub fn matches(record: &ProjectRecord, filter: &FilterState) -> bool {
    matches_query(record, filter.active_query())
        && matches_domain(record, &filter.domain)
        && matches_language(record, &filter.language)
        && (!filter.has_github || record.has_github())
        && (!filter.has_demo || record.has_demo())
        && (!filter.has_paper || record.has_paper())
        && matches_tags(record, &filter.selected_tags)
}

/// Case-insensitive substring test against the record haystack.
///
/// Blank queries always pass.
pub fn matches_query(record: &ProjectRecord, query: &str) -> bool {
    let needle = query.trim();
    if needle.is_empty() {
        return true;
    }
    search_haystack(record).contains(&needle.to_lowercase())
}

/// Exact domain match; an empty `domain` passes every record.
pub fn matches_domain(record: &ProjectRecord, domain: &str) -> bool {
    domain.is_empty() || record.domain == domain
}

/// Exact language membership; an empty `language` passes every record.
pub fn matches_language(record: &ProjectRecord, language: &str) -> bool {
    language.is_empty() || record.has_language(language)
}

/// Every selected tag must be a skill or tool of the record.
pub fn matches_tags(record: &ProjectRecord, selected: &[String]) -> bool {
    selected.iter().all(|tag| record.has_tag(tag))
}

/// Lower-cased, space-joined text searched by the free-text query.
///
/// Order: title, blurb, domain, skills, languages, tools, year. Empty parts
/// are skipped so they never introduce double spaces; year `0` stands for an
/// unknown year and is skipped too.
pub fn search_haystack(record: &ProjectRecord) -> String {
    let year = match record.year {
        0 => String::new(),
        year => year.to_string(),
    };
    let parts = [record.title.as_str(), record.blurb.as_str(), record.domain.as_str()]
        .into_iter()
        .chain(record.skills.iter().map(String::as_str))
        .chain(record.languages.iter().map(String::as_str))
        .chain(record.tools.iter().map(String::as_str))
        .chain(std::iter::once(year.as_str()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    parts.join(" ").to_lowercase()
}
