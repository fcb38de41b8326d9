//! Runtime configuration resolved from environment variables.
//!
//! # Responsibility
//! - Resolve content, preference and logging settings with stable defaults.
//!
//! # Invariants
//! - Resolution never fails; blank or invalid values fall back to defaults.
//! - A zero rotation interval is rejected in favor of the default.

use crate::featured::rotation::DEFAULT_ROTATION_INTERVAL_MS;
use crate::logging::default_log_level;
use log::warn;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_PROJECTS_PATH: &str = "FOLIO_PROJECTS_PATH";
pub const ENV_PREFS_PATH: &str = "FOLIO_PREFS_PATH";
pub const ENV_ROTATION_INTERVAL_MS: &str = "FOLIO_ROTATION_INTERVAL_MS";
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";

const DEFAULT_PROJECTS_PATH: &str = "data/projects.json";
const PREFS_FILE_NAME: &str = "folio_prefs.json";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    pub projects_path: PathBuf,
    pub preferences_path: PathBuf,
    pub rotation_interval: Duration,
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            projects_path: PathBuf::from(DEFAULT_PROJECTS_PATH),
            preferences_path: std::env::temp_dir().join(PREFS_FILE_NAME),
            rotation_interval: Duration::from_millis(DEFAULT_ROTATION_INTERVAL_MS),
            log_level: default_log_level().to_string(),
        }
    }
}

impl FolioConfig {
    /// Resolves settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which maps a variable name to its
    /// raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let rotation_interval = match read(ENV_ROTATION_INTERVAL_MS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!(
                        "event=config_resolve module=config status=fallback key={} value={}",
                        ENV_ROTATION_INTERVAL_MS, raw
                    );
                    defaults.rotation_interval
                }
            },
            None => defaults.rotation_interval,
        };

        Self {
            projects_path: read(ENV_PROJECTS_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.projects_path),
            preferences_path: read(ENV_PREFS_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_path),
            rotation_interval,
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        }
    }
}
