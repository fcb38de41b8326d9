use folio_core::{matches, FilterState, ProjectRecord};
use serde_json::json;

fn record(value: serde_json::Value) -> ProjectRecord {
    serde_json::from_value::<ProjectRecord>(value).unwrap().normalized()
}

fn sample_records() -> Vec<ProjectRecord> {
    vec![
        record(json!({
            "slug": "credit-risk",
            "title": "Credit Risk Calibration",
            "blurb": "Calibrated default probabilities for small-business loans.",
            "domain": "FinTech",
            "year": 2024,
            "languages": ["Python", "SQL"],
            "tools": ["LightGBM", "Azure"],
            "skills": ["Calibration", "Python"],
            "links": { "github": "https://github.com/example/credit-risk" }
        })),
        record(json!({
            "slug": "llm-eval",
            "title": "LLM Evaluation Harness",
            "blurb": "Decision-aware evaluation of model outputs.",
            "domain": "ML",
            "year": 2025,
            "languages": ["Python"],
            "tools": ["PyTorch"],
            "skills": ["LLMs"],
            "links": { "demo": "https://demo.example/llm", "writeup": "https://blog.example/llm" }
        })),
        record(json!({ "slug": "bare" })),
    ]
}

#[test]
fn empty_filter_passes_every_record() {
    let filter = FilterState::default();
    for record in sample_records() {
        assert!(matches(&record, &filter), "{} should pass", record.slug);
    }
}

#[test]
fn missing_tag_excludes_record() {
    let mut filter = FilterState::new();
    filter.add_tag("Kubernetes");
    for record in sample_records() {
        assert!(!matches(&record, &filter), "{} should fail", record.slug);
    }
}

#[test]
fn tag_filter_is_conjunctive_over_skills_and_tools() {
    let records = sample_records();
    let mut python_only = FilterState::new();
    python_only.add_tag("Python");
    assert!(matches(&records[0], &python_only));

    let mut python_and_sql = FilterState::new();
    python_and_sql.add_tag("Python");
    python_and_sql.add_tag("SQL");
    // SQL is a language here, not a skill or tool.
    assert!(!matches(&records[0], &python_and_sql));

    let mut python_and_azure = FilterState::new();
    python_and_azure.add_tag("Python");
    python_and_azure.add_tag("Azure");
    assert!(matches(&records[0], &python_and_azure));
    assert!(!matches(&records[1], &python_and_azure));
}

#[test]
fn query_is_case_insensitive_and_matches_year() {
    let records = sample_records();
    let mut filter = FilterState::new();

    filter.set_query("CALIBRAT");
    assert!(matches(&records[0], &filter));
    assert!(!matches(&records[1], &filter));

    filter.set_query("2024");
    assert!(matches(&records[0], &filter));
    assert!(!matches(&records[1], &filter));

    filter.set_query("  pytorch ");
    assert!(matches(&records[1], &filter));
}

#[test]
fn query_spans_joined_fields() {
    let records = sample_records();
    let mut filter = FilterState::new();
    filter.set_query("fintech calibration");
    assert!(matches(&records[0], &filter));
}

#[test]
fn domain_and_language_are_exact() {
    let records = sample_records();
    let mut filter = FilterState::new();

    filter.set_domain("fintech");
    assert!(!matches(&records[0], &filter));
    filter.set_domain("FinTech");
    assert!(matches(&records[0], &filter));

    filter.set_domain("");
    filter.set_language("SQL");
    assert!(matches(&records[0], &filter));
    assert!(!matches(&records[1], &filter));
}

#[test]
fn link_flags_require_present_links() {
    let records = sample_records();
    let mut filter = FilterState::new();

    filter.toggle_github();
    assert!(matches(&records[0], &filter));
    assert!(!matches(&records[1], &filter));
    assert!(!matches(&records[2], &filter));

    filter.clear();
    filter.toggle_demo();
    assert!(!matches(&records[0], &filter));
    assert!(matches(&records[1], &filter));
}

#[test]
fn paper_flag_accepts_legacy_writeup() {
    let records = sample_records();
    let mut filter = FilterState::new();
    filter.toggle_paper();

    assert!(!matches(&records[0], &filter));
    assert!(matches(&records[1], &filter));
}

#[test]
fn empty_link_string_counts_as_absent() {
    let record = record(json!({
        "slug": "empty-links",
        "links": { "github": "", "paper": "" }
    }));
    let mut filter = FilterState::new();
    filter.toggle_github();
    assert!(!matches(&record, &filter));

    filter.clear();
    filter.toggle_paper();
    assert!(!matches(&record, &filter));
}

#[test]
fn query_zero_does_not_match_records_without_year() {
    let yearless = record(json!({ "slug": "yearless", "title": "Notes" }));
    let mut filter = FilterState::new();
    filter.set_query("0");
    assert!(!matches(&yearless, &filter));

    let dated = record(json!({ "slug": "dated", "year": 2020 }));
    assert!(matches(&dated, &filter));
}
