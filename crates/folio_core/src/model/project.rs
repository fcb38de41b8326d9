//! Project record model.
//!
//! # Responsibility
//! - Define the record shape read from the static projects JSON.
//! - Default absent or `null` optional fields at the decode boundary so the
//!   filter engine can assume fully-populated records.
//!
//! # Invariants
//! - `slug` is required; every other field has a defined default.
//! - A field of the wrong JSON type decodes to its default; it never drops
//!   the record.
//! - After [`ProjectRecord::normalized`], `languages`/`tools`/`skills` hold no
//!   duplicates or empty entries and keep source order.
//! - After [`ProjectRecord::normalized`], empty link strings are `None`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stable identifier used as lookup key and route segment.
pub type ProjectSlug = String;

/// Outbound links of one project. Opaque strings, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(
        default,
        deserialize_with = "lenient_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub github: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub demo: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub paper: Option<String>,
    /// Older alias of `paper`, still honored by link filters.
    #[serde(
        default,
        deserialize_with = "lenient_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub writeup: Option<String>,
}

impl ProjectLinks {
    /// Paper link, falling back to the legacy `writeup` field.
    pub fn paper_href(&self) -> Option<&str> {
        self.paper.as_deref().or(self.writeup.as_deref())
    }

    fn normalized(self) -> Self {
        Self {
            github: non_empty(self.github),
            demo: non_empty(self.demo),
            paper: non_empty(self.paper),
            writeup: non_empty(self.writeup),
        }
    }
}

/// Narrative block rendered on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(default, deserialize_with = "lenient_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub body: Vec<String>,
}

/// Label/value pair shown in the detail "Quick Stats" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStat {
    #[serde(default, deserialize_with = "lenient_default")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub value: String,
}

/// One static portfolio entry.
///
/// Field names follow the camelCase JSON schema of the content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub slug: ProjectSlug,
    #[serde(default, deserialize_with = "lenient_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub blurb: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub highlights: Vec<String>,
    /// Single category, not a set.
    #[serde(default, deserialize_with = "lenient_default")]
    pub domain: String,
    /// Default sort key. Absent or non-numeric years decode as `0`.
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: i32,
    #[serde(default, deserialize_with = "lenient_list")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub links: ProjectLinks,
    #[serde(
        default,
        deserialize_with = "lenient_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub sections: Vec<ProjectSection>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub stats: Vec<ProjectStat>,
    /// Only the number `1` marks a record as featured.
    #[serde(default, deserialize_with = "lenient_featured_flag")]
    pub featured: bool,
    /// Lower sorts earlier; `None` sorts after every explicit order.
    #[serde(default, deserialize_with = "lenient_featured_order")]
    pub featured_order: Option<i64>,
}

impl ProjectRecord {
    /// Creates a minimal record; every optional field takes its default.
    pub fn new(slug: impl Into<ProjectSlug>, title: impl Into<String>, year: i32) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            blurb: String::new(),
            highlights: Vec::new(),
            domain: String::new(),
            year,
            languages: Vec::new(),
            tools: Vec::new(),
            skills: Vec::new(),
            links: ProjectLinks::default(),
            cover_image: None,
            images: Vec::new(),
            sections: Vec::new(),
            stats: Vec::new(),
            featured: false,
            featured_order: None,
        }
    }

    /// Collapses duplicate/empty set entries and empty optional strings.
    ///
    /// Idempotent: normalizing a normalized record returns it unchanged.
    pub fn normalized(self) -> Self {
        Self {
            languages: dedup_preserving_order(self.languages),
            tools: dedup_preserving_order(self.tools),
            skills: dedup_preserving_order(self.skills),
            links: self.links.normalized(),
            cover_image: non_empty(self.cover_image),
            images: self
                .images
                .into_iter()
                .filter(|src| !src.is_empty())
                .collect(),
            ..self
        }
    }

    /// `true` when a non-empty GitHub link is present.
    pub fn has_github(&self) -> bool {
        is_present(self.links.github.as_deref())
    }

    /// `true` when a non-empty demo link is present.
    pub fn has_demo(&self) -> bool {
        is_present(self.links.demo.as_deref())
    }

    /// `true` when either `paper` or the legacy `writeup` link is present.
    pub fn has_paper(&self) -> bool {
        is_present(self.links.paper.as_deref()) || is_present(self.links.writeup.as_deref())
    }

    /// Exact membership test over `languages`.
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.iter().any(|value| value == language)
    }

    /// Membership test over the union of `skills` and `tools`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.skills
            .iter()
            .chain(self.tools.iter())
            .any(|value| value == tag)
    }

    /// Route path of the detail page for this record.
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// `null` or a value of the wrong shape decodes as `T::default()`.
fn lenient_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the array items that decode as `T`; a non-array is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let year = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .and_then(|raw| i32::try_from(raw).ok()),
        Value::String(text) => text.trim().parse::<i32>().ok(),
        _ => None,
    };
    Ok(year.unwrap_or_default())
}

fn lenient_featured_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64() == Some(1.0),
        _ => false,
    })
}

fn lenient_featured_order<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::{dedup_preserving_order, ProjectLinks, ProjectRecord};
    use serde_json::json;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let values = vec![
            "Rust".to_string(),
            "SQL".to_string(),
            "Rust".to_string(),
            String::new(),
            "Python".to_string(),
        ];
        assert_eq!(
            dedup_preserving_order(values),
            vec!["Rust", "SQL", "Python"]
        );
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "slug": "nulls",
            "title": null,
            "skills": null,
            "links": null,
            "year": null,
            "featured": null
        }))
        .unwrap();

        assert_eq!(record.title, "");
        assert!(record.skills.is_empty());
        assert!(!record.has_github());
        assert_eq!(record.year, 0);
        assert!(!record.featured);
    }

    #[test]
    fn normalized_is_idempotent() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "slug": "twice",
            "tools": ["Docker", "Docker", ""],
            "links": { "github": "", "demo": "https://demo.example" }
        }))
        .unwrap();

        let once = record.normalized();
        let twice = once.clone().normalized();
        assert_eq!(once, twice);
        assert_eq!(once.tools, vec!["Docker"]);
        assert_eq!(once.links.github, None);
    }

    #[test]
    fn wrongly_typed_fields_fall_back_to_defaults() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "slug": "typed",
            "title": 7,
            "coverImage": 5,
            "images": "a.png",
            "stats": { "label": "Users", "value": "9" },
            "links": "https://example.com",
            "skills": ["Rust", 3, null, "SQL"],
            "sections": [{ "title": "Ok", "body": ["text", 1] }, "not a section"]
        }))
        .unwrap();

        assert_eq!(record.title, "");
        assert_eq!(record.cover_image, None);
        assert!(record.images.is_empty());
        assert!(record.stats.is_empty());
        assert_eq!(record.links, ProjectLinks::default());
        assert_eq!(record.skills, vec!["Rust", "SQL"]);
        assert_eq!(record.sections.len(), 1);
        assert_eq!(record.sections[0].body, vec!["text"]);
    }

    #[test]
    fn only_number_one_marks_featured() {
        let decode = |featured: serde_json::Value| {
            serde_json::from_value::<ProjectRecord>(json!({ "slug": "f", "featured": featured }))
                .unwrap()
                .featured
        };
        assert!(decode(json!(1)));
        assert!(decode(json!(1.0)));
        assert!(!decode(json!(true)));
        assert!(!decode(json!("1")));
        assert!(!decode(json!(2)));
    }

    #[test]
    fn missing_or_non_string_slug_fails() {
        assert!(serde_json::from_value::<ProjectRecord>(json!({ "title": "x" })).is_err());
        assert!(serde_json::from_value::<ProjectRecord>(json!({ "slug": 5 })).is_err());
    }
}
