use folio_core::{
    load_records_from_path, load_records_from_str, try_load_records_from_path,
    try_load_records_from_str, LoadError, ProjectRepository, StaticProjectRepository,
};
use std::io::Write;

const LIST_SOURCE: &str = r#"[
  { "slug": "alpha", "title": "Alpha", "year": 2023 },
  { "slug": "beta", "title": "Beta", "year": "2024" }
]"#;

const WRAPPED_SOURCE: &str = r#"{ "default": [
  { "slug": "alpha", "title": "Alpha", "year": 2023 },
  { "slug": "beta", "title": "Beta", "year": "2024" }
] }"#;

#[test]
fn list_and_wrapped_shapes_normalize_identically() {
    let from_list = load_records_from_str(LIST_SOURCE);
    let from_wrapped = load_records_from_str(WRAPPED_SOURCE);

    assert_eq!(from_list.len(), 2);
    assert_eq!(from_list, from_wrapped);
    assert_eq!(from_list[1].year, 2024);
}

#[test]
fn unrecognized_shape_yields_empty_list() {
    assert!(load_records_from_str("{}").is_empty());
    assert!(load_records_from_str(r#"{ "projects": [] }"#).is_empty());
    assert!(load_records_from_str("42").is_empty());
    assert!(load_records_from_str("null").is_empty());
}

#[test]
fn invalid_json_is_empty_but_surfaced_by_try_variant() {
    assert!(load_records_from_str("[{ broken").is_empty());
    assert!(matches!(
        try_load_records_from_str("[{ broken"),
        Err(LoadError::Json(_))
    ));
}

#[test]
fn absent_and_null_fields_take_defaults() {
    let records = load_records_from_str(
        r#"[{
            "slug": "sparse",
            "title": null,
            "languages": null,
            "links": null,
            "year": "not a year",
            "featured": 1
        }]"#,
    );
    let record = &records[0];

    assert_eq!(record.title, "");
    assert!(record.languages.is_empty());
    assert!(!record.has_github());
    assert_eq!(record.year, 0);
    assert!(record.featured);
    assert_eq!(record.featured_order, None);
}

#[test]
fn set_fields_are_deduplicated_in_source_order() {
    let records = load_records_from_str(
        r#"[{ "slug": "dupes", "skills": ["Rust", "", "SQL", "Rust"], "tools": ["Git", "Git"] }]"#,
    );
    assert_eq!(records[0].skills, vec!["Rust", "SQL"]);
    assert_eq!(records[0].tools, vec!["Git"]);
}

#[test]
fn loads_from_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WRAPPED_SOURCE.as_bytes()).unwrap();

    let records = load_records_from_path(file.path());
    assert_eq!(records.len(), 2);

    let repo = StaticProjectRepository::from_path(file.path());
    assert_eq!(repo.find_by_slug("beta").unwrap().title, "Beta");
    assert!(repo.find_by_slug("gamma").is_none());
}

#[test]
fn missing_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    assert!(load_records_from_path(&path).is_empty());
    assert!(matches!(
        try_load_records_from_path(&path),
        Err(LoadError::Io { .. })
    ));
    assert!(StaticProjectRepository::from_path(&path).is_empty());
}

#[test]
fn slug_lookup_is_exact() {
    let repo = StaticProjectRepository::from_json_str(LIST_SOURCE);
    assert!(repo.find_by_slug("alpha").is_some());
    assert!(repo.find_by_slug("Alpha").is_none());
    assert!(repo.find_by_slug(" alpha").is_none());
}

#[test]
fn malformed_presentation_fields_keep_the_record() {
    let records = load_records_from_str(
        r#"[
            { "slug": "ok", "title": "Ok" },
            { "slug": "stats", "stats": { "label": "Users", "value": "9" } },
            { "slug": "images", "images": "a.png" },
            { "slug": "cover", "coverImage": 5 },
            { "slug": "links", "links": "https://x" },
            { "title": "no slug" }
        ]"#,
    );
    let slugs = records.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>();
    assert_eq!(slugs, vec!["ok", "stats", "images", "cover", "links"]);

    let repo = StaticProjectRepository::new(records);
    let links = repo.find_by_slug("links").unwrap();
    assert!(!links.has_github());
    assert!(repo.find_by_slug("cover").unwrap().cover_image.is_none());
    assert!(repo.find_by_slug("images").unwrap().images.is_empty());
}
