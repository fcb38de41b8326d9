//! Site route surface.
//!
//! # Invariants
//! - Parsing is total: unknown paths map to `Route::NotFound`.
//! - A single trailing slash is tolerated; query strings and fragments are
//!   ignored.

/// Pages of the portfolio site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Resume,
    Projects,
    ProjectDetail { slug: String },
    NotFound,
}

impl Route {
    /// Parses a site path such as `/projects/credit-risk`.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["resume"] => Self::Resume,
            ["projects"] => Self::Projects,
            ["projects", slug] => Self::ProjectDetail {
                slug: (*slug).to_string(),
            },
            _ => Self::NotFound,
        }
    }

    /// Canonical path for this route; `None` for `NotFound`.
    pub fn path(&self) -> Option<String> {
        match self {
            Self::Home => Some("/".to_string()),
            Self::About => Some("/about".to_string()),
            Self::Resume => Some("/resume".to_string()),
            Self::Projects => Some("/projects".to_string()),
            Self::ProjectDetail { slug } => Some(format!("/projects/{slug}")),
            Self::NotFound => None,
        }
    }

    /// Whether rendering this route depends on project records.
    pub fn needs_projects(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Projects | Self::ProjectDetail { .. }
        )
    }
}
