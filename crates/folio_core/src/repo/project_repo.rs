//! Project repository contract and static JSON implementation.
//!
//! # Responsibility
//! - Normalize the static source (`[...]` or `{ "default": [...] }`) into a
//!   plain ordered record list in one deserialization step.
//! - Keep slug lookup inside the store boundary.
//!
//! # Invariants
//! - `load_*` functions never return errors; `try_load_*` expose them.
//! - Source order is preserved.
//! - A record that fails to decode is skipped; its siblings survive.
//! - Duplicate slugs keep the first record and drop later ones.

use crate::model::project::ProjectRecord;
use log::{info, warn};
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type LoadResult<T> = Result<T, LoadError>;

/// Failure while reading or parsing a projects source.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read projects source `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "projects source is not valid JSON: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Accepted top-level shapes of the projects source.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectSource {
    List(Vec<Value>),
    Wrapped { default: Vec<Value> },
    Unrecognized(IgnoredAny),
}

/// Normalizes an already-parsed JSON value into records.
///
/// A sequence is used as-is, `{ "default": [...] }` is unwrapped, anything
/// else yields an empty list.
pub fn records_from_value(value: Value) -> Vec<ProjectRecord> {
    let items = match serde_json::from_value::<ProjectSource>(value) {
        Ok(ProjectSource::List(items)) | Ok(ProjectSource::Wrapped { default: items }) => items,
        Ok(ProjectSource::Unrecognized(_)) | Err(_) => {
            warn!("event=projects_decode module=repo status=empty reason=unrecognized_shape");
            return Vec::new();
        }
    };

    let total = items.len();
    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<ProjectRecord>(item) {
            Ok(record) => Some(record.normalized()),
            Err(err) => {
                warn!(
                    "event=projects_decode module=repo status=skip index={} error={}",
                    index, err
                );
                None
            }
        })
        .collect::<Vec<_>>();

    info!(
        "event=projects_decode module=repo status=ok total={} decoded={}",
        total,
        records.len()
    );
    records
}

/// Parses JSON text and normalizes it, surfacing syntax errors.
pub fn try_load_records_from_str(text: &str) -> LoadResult<Vec<ProjectRecord>> {
    let value = serde_json::from_str::<Value>(text)?;
    Ok(records_from_value(value))
}

/// Parses JSON text and normalizes it; invalid JSON yields an empty list.
pub fn load_records_from_str(text: &str) -> Vec<ProjectRecord> {
    try_load_records_from_str(text).unwrap_or_else(|err| {
        warn!("event=projects_load module=repo status=empty mode=text error={err}");
        Vec::new()
    })
}

/// Reads and normalizes a projects file, surfacing IO and syntax errors.
pub fn try_load_records_from_path(path: impl AsRef<Path>) -> LoadResult<Vec<ProjectRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    try_load_records_from_str(&text)
}

/// Reads and normalizes a projects file; any failure yields an empty list.
pub fn load_records_from_path(path: impl AsRef<Path>) -> Vec<ProjectRecord> {
    try_load_records_from_path(path).unwrap_or_else(|err| {
        warn!("event=projects_load module=repo status=empty mode=file error={err}");
        Vec::new()
    })
}

/// Read-only access to the loaded record set.
pub trait ProjectRepository {
    /// All records in source order.
    fn all(&self) -> &[ProjectRecord];
    /// Resolves a slug to at most one record.
    fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord>;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

impl<R: ProjectRepository + ?Sized> ProjectRepository for &R {
    fn all(&self) -> &[ProjectRecord] {
        (**self).all()
    }

    fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        (**self).find_by_slug(slug)
    }
}

/// In-memory repository built once from static content.
#[derive(Debug, Clone, Default)]
pub struct StaticProjectRepository {
    records: Vec<ProjectRecord>,
    slug_index: HashMap<String, usize>,
}

impl StaticProjectRepository {
    /// Builds a repository, dropping records whose slug was already seen.
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        let mut kept = Vec::with_capacity(records.len());
        let mut slug_index = HashMap::with_capacity(records.len());
        for record in records {
            if slug_index.contains_key(record.slug.as_str()) {
                warn!(
                    "event=projects_index module=repo status=skip reason=duplicate_slug slug={}",
                    record.slug
                );
                continue;
            }
            slug_index.insert(record.slug.clone(), kept.len());
            kept.push(record);
        }
        Self {
            records: kept,
            slug_index,
        }
    }

    /// Repository with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a repository from JSON text; invalid text yields an empty one.
    pub fn from_json_str(text: &str) -> Self {
        Self::new(load_records_from_str(text))
    }

    /// Builds a repository from a file; any failure yields an empty one.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(load_records_from_path(path))
    }
}

impl ProjectRepository for StaticProjectRepository {
    fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.slug_index
            .get(slug)
            .and_then(|index| self.records.get(*index))
    }
}
