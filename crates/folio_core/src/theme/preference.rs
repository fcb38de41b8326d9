//! Theme preference read/apply/persist contract.
//!
//! # Invariants
//! - `ThemeController::initialize` reads the store exactly once.
//! - A missing, unreadable or corrupt stored value falls back to the ambient
//!   theme.
//! - `toggle` always flips the in-session theme, even when persisting fails.
//! - Stored shape is `{"theme":"light"|"dark"}`.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

/// Display theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name used in storage and class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Maps a platform "prefers dark" signal to a theme.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PreferenceError::UnknownTheme(other.to_string())),
        }
    }
}

/// Preference storage failure.
#[derive(Debug)]
pub enum PreferenceError {
    Io(std::io::Error),
    Json(serde_json::Error),
    UnknownTheme(String),
    /// Storage is not available on this host.
    Unavailable,
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "preference storage IO failed: {err}"),
            Self::Json(err) => write!(f, "stored preference is malformed: {err}"),
            Self::UnknownTheme(value) => {
                write!(f, "unknown theme `{value}`; expected light|dark")
            }
            Self::Unavailable => write!(f, "preference storage is unavailable"),
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::UnknownTheme(_) | Self::Unavailable => None,
        }
    }
}

impl From<std::io::Error> for PreferenceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PreferenceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Durable storage for the single theme preference.
pub trait PreferenceStore {
    /// Returns the stored theme, or `None` when nothing was stored yet.
    fn load(&self) -> Result<Option<Theme>, PreferenceError>;
    fn save(&self, theme: Theme) -> Result<(), PreferenceError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: Theme,
}

/// JSON file backed preference store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store backed by the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the preference file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<Theme>, PreferenceError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let stored = serde_json::from_str::<StoredPreference>(&text)?;
        Ok(Some(stored.theme))
    }

    fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string(&StoredPreference { theme })?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// In-process store for hosts without durable storage and for tests.
#[derive(Debug)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<Theme>>,
    available: bool,
}

impl MemoryPreferenceStore {
    /// Available store with nothing saved yet.
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
            available: true,
        }
    }

    /// Available store preloaded with `theme`.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            value: Mutex::new(Some(theme)),
            available: true,
        }
    }

    /// A store whose reads and writes always fail.
    pub fn unavailable() -> Self {
        Self {
            value: Mutex::new(None),
            available: false,
        }
    }

    /// Currently saved theme, if any.
    pub fn stored(&self) -> Option<Theme> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<Theme>, PreferenceError> {
        if !self.available {
            return Err(PreferenceError::Unavailable);
        }
        Ok(self.stored())
    }

    fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        if !self.available {
            return Err(PreferenceError::Unavailable);
        }
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(theme);
        Ok(())
    }
}

/// Presentation hook receiving the active theme (e.g. document class and
/// native control color scheme).
pub trait ThemeSink {
    fn apply(&mut self, theme: Theme);
}

impl<F: FnMut(Theme)> ThemeSink for F {
    fn apply(&mut self, theme: Theme) {
        self(theme)
    }
}

/// Where the session's initial theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeOrigin {
    Stored,
    Ambient,
}

/// Session-owned theme preference.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    theme: Theme,
    origin: ThemeOrigin,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Reads the stored preference once, falling back to `ambient`.
    pub fn initialize(store: S, ambient: Theme) -> Self {
        let (theme, origin) = match store.load() {
            Ok(Some(theme)) => (theme, ThemeOrigin::Stored),
            Ok(None) => (ambient, ThemeOrigin::Ambient),
            Err(err) => {
                warn!("event=theme_load module=theme status=fallback error={err}");
                (ambient, ThemeOrigin::Ambient)
            }
        };
        info!(
            "event=theme_init module=theme status=ok theme={} origin={:?}",
            theme, origin
        );
        Self {
            store,
            theme,
            origin,
        }
    }

    /// Theme active in this session.
    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Whether the session theme came from storage or the ambient signal.
    pub fn origin(&self) -> ThemeOrigin {
        self.origin
    }

    /// Backing preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Pushes the active theme to the presentation layer.
    pub fn apply(&self, sink: &mut impl ThemeSink) {
        sink.apply(self.theme);
    }

    /// Flips the theme and persists it. Persist failures are logged only.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.save(self.theme) {
            warn!(
                "event=theme_persist module=theme status=error theme={} error={err}",
                self.theme
            );
        }
        self.theme
    }

    /// Toggles, then applies the new theme through `sink`.
    pub fn toggle_and_apply(&mut self, sink: &mut impl ThemeSink) -> Theme {
        let theme = self.toggle();
        sink.apply(theme);
        theme
    }
}
