//! Zroster: a Zellij plugin for keeping a single-screen roster of named entries.
//!
//! Zroster displays an in-memory list of named entries and lets you:
//! - Mark entries as favorites (favorites group first, the rest below)
//! - Delete entries
//! - Filter by case-insensitive name substring
//! - Add new entries through the same text field that drives the filter
//!
//! All state lives in memory for the lifetime of the pane. There is no
//! persistence, no network surface, and no background work: close the pane
//! and the roster is gone.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Roster state
//! │  - Event handling                                   │  ← Mutations/queries
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!              │                        │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain (domain/)      │
//! │ - Rendering           │   │ - Entry model         │
//! │ - Theming             │   │ - Error types         │
//! │ - Components          │   │                       │
//! └───────────────────────┘   └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state with event/action model
//! - [`domain`]: Core domain types (Entry, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zroster.wasm" {
//!         seed_count "20"
//!         seed_names "Ann,Bob,Cara"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Interaction model
//!
//! One shared text field feeds two distinct submit affordances, like a
//! combined search-or-add bar:
//!
//! - `Enter` applies the buffer as the filter (the buffer is kept)
//! - `Ctrl+a` adds the buffer as a new entry (the buffer is cleared)
//!
//! Filtering only changes on an explicit submit; typing alone never
//! refilters. Blank input on add is silently ignored.
//!
//! # Example
//!
//! ```rust
//! use zroster::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     seed_names: vec!["Ann".to_string(), "Bob".to_string()],
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! for event in [Event::KeyDown, Event::ToggleFavorite] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.favorite_count(), 1);
//! # Ok::<(), zroster::ZrosterError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputFocus, InputMode};
pub use domain::{Entry, EntryId, Result, ZrosterError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Number of placeholder entries seeded when no explicit seed is configured.
const DEFAULT_SEED_COUNT: usize = 20;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit seed entry names.
    ///
    /// When non-empty these become the initial roster, in order. Default:
    /// empty (placeholder entries are generated instead).
    pub seed_names: Vec<String>,

    /// Number of placeholder entries (`Entry 1`, `Entry 2`, ...) to seed when
    /// `seed_names` is empty. Default: 20
    pub seed_count: usize,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_names: Vec::new(),
            seed_count: DEFAULT_SEED_COUNT,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `seed_names`: Comma-separated string → `Vec<String>` (values are
    ///   kept verbatim apart from splitting; fully blank values are dropped)
    /// - `seed_count`: String → `usize` (falls back to 20 on parse error)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zroster::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("seed_names".to_string(), "Ann,Bob".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.seed_names, vec!["Ann", "Bob"]);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let seed_names = config
            .get("seed_names")
            .map(|s| {
                s.split(',')
                    .filter(|name| !name.trim().is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let seed_count = config
            .get("seed_count")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_SEED_COUNT);

        Self {
            seed_names,
            seed_count,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the initial roster names from the configuration.
    ///
    /// Explicit `seed_names` win; otherwise `seed_count` placeholder entries
    /// are generated.
    #[must_use]
    pub fn resolve_seed(&self) -> Vec<String> {
        if self.seed_names.is_empty() {
            (1..=self.seed_count).map(|i| format!("Entry {i}")).collect()
        } else {
            self.seed_names.clone()
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the resolved theme (from file, name, or
/// default) and the seeded roster. Theme failures fall back to the default
/// theme with a debug log; nothing is surfaced to the user.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zroster plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.resolve_seed(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_zellij_parses_seed_names() {
        let mut map = BTreeMap::new();
        map.insert("seed_names".to_string(), "Ann,Bob, Cara ,,".to_string());

        let config = Config::from_zellij(&map);
        // Values are split verbatim; only fully blank segments are dropped.
        assert_eq!(config.seed_names, vec!["Ann", "Bob", " Cara "]);
    }

    #[test]
    fn from_zellij_falls_back_on_bad_seed_count() {
        let mut map = BTreeMap::new();
        map.insert("seed_count".to_string(), "many".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.seed_count, DEFAULT_SEED_COUNT);
    }

    #[test]
    fn resolve_seed_generates_placeholders() {
        let config = Config {
            seed_count: 3,
            ..Default::default()
        };
        assert_eq!(config.resolve_seed(), vec!["Entry 1", "Entry 2", "Entry 3"]);
    }

    #[test]
    fn resolve_seed_prefers_explicit_names() {
        let config = Config {
            seed_names: vec!["Ann".to_string()],
            seed_count: 5,
            ..Default::default()
        };
        assert_eq!(config.resolve_seed(), vec!["Ann"]);
    }

    #[test]
    fn initialize_seeds_default_roster() {
        let state = initialize(&Config::default());
        assert_eq!(state.entries.len(), DEFAULT_SEED_COUNT);
        assert_eq!(state.favorite_count(), 0);
        assert_eq!(state.non_favorite_count(), DEFAULT_SEED_COUNT);
    }

    #[test]
    fn initialize_with_unknown_theme_uses_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            seed_count: 1,
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
