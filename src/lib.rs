//! Photofeed: a terminal photo-feed widget.
//!
//! Users submit an image URL and a caption to create posts, and react to
//! existing posts with one of a fixed set of reaction kinds (`like`, `wow`,
//! `laugh`). The feed lives in memory, ordered most recent first, and resets
//! when the process ends.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shim (main.rs or embedding application)       │  ← Input translation
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Feed state
//! │  - Event handling                                   │  ← Controller
//! │  - View side-effect actions                         │
//! │  - FeedView capability contract                     │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────┐              ┌───────────────────┐
//! │ UI Layer (ui/)    │              │ Domain (domain/)  │
//! │ - View models     │              │ - Post model      │
//! │ - Theming         │              │ - Reaction kinds  │
//! │ - Components      │              │ - Error types     │
//! └───────────────────┘              └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - File-destination tracing (observability/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Feed state, event handler, actions, view contract, controller
//! - [`domain`]: Core domain types (Post, reaction kinds, errors)
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`observability`]: Tracing subscriber setup
//!
//! # Basic Usage
//!
//! ```
//! use photofeed::{Config, initialize, ReactionKind};
//!
//! let config = Config::default();
//! let mut controller = initialize(&config);
//!
//! // Seeds the demonstration posts and draws the first frame.
//! // controller.init();
//!
//! // Host input maps onto two entry points:
//! // controller.handle_create_post("https://example.com/a.png", "caption");
//! // controller.handle_react(1, ReactionKind::Like);
//! ```
//!
//! Embedders that render elsewhere implement [`FeedView`] and drive a
//! [`FeedController`] over their own view type; the terminal layer under
//! [`ui`] is one implementation of that contract, not a requirement.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, Event, FeedController, FeedState, FeedView, MISSING_FIELDS_MESSAGE,
};
pub use domain::{FeedError, Post, ReactionCounts, ReactionKind, Result};
pub use ui::{TerminalView, Theme};

use std::collections::BTreeMap;

/// Widget configuration supplied by the host.
///
/// Values typically arrive as a string key/value map (command-line pairs,
/// an embedding application's settings) and are parsed with
/// [`Config::from_map`]; missing or malformed values fall back per key.
#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `feed-dark`, `feed-light`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. A leading `~` is expanded to the
    /// home directory. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log filter level: `trace`, `debug`, `info`, `warn`, `error`.
    ///
    /// Overridden by `RUST_LOG` when that is set. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Terminal height in rows. Default: 24.
    pub rows: usize,

    /// Terminal width in columns. Default: 80.
    pub cols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            rows: 24,
            cols: 80,
        }
    }
}

impl Config {
    /// Parses configuration from a host-supplied key/value map.
    ///
    /// Recognized keys: `theme`, `theme_file`, `trace_level`, `rows`,
    /// `cols`. Numeric keys fall back to their defaults on parse failure or
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use photofeed::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "feed-light".to_string());
    /// map.insert("rows".to_string(), "40".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("feed-light"));
    /// assert_eq!(config.rows, 40);
    /// assert_eq!(config.cols, 80);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let rows = config
            .get("rows")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.rows);

        let cols = config
            .get("cols")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.cols);

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            rows,
            cols,
        }
    }
}

/// Builds a feed controller over the terminal view.
///
/// Resolves the theme (a configured file takes precedence over a built-in
/// name, and any failure falls back to the default theme with a debug log),
/// then wires a [`TerminalView`] sized from the configuration into a fresh
/// [`FeedController`]. Call [`FeedController::init`] on the result to seed
/// the demonstration posts and draw the first frame.
#[must_use]
pub fn initialize(config: &Config) -> FeedController<TerminalView> {
    tracing::debug!(rows = config.rows, cols = config.cols, "initializing photofeed");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let view = TerminalView::new(theme, config.rows, config.cols);
    FeedController::new(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_map_reads_every_recognized_key() {
        let config = Config::from_map(&map(&[
            ("theme", "feed-light"),
            ("theme_file", "/tmp/t.toml"),
            ("trace_level", "debug"),
            ("rows", "30"),
            ("cols", "120"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("feed-light"));
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/t.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.rows, 30);
        assert_eq!(config.cols, 120);
    }

    #[test]
    fn from_map_falls_back_per_key() {
        let config = Config::from_map(&map(&[("rows", "not-a-number"), ("cols", "0")]));

        assert_eq!(config.rows, 24);
        assert_eq!(config.cols, 80);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn initialize_respects_the_named_theme() {
        let config = Config {
            theme_name: Some("feed-light".to_string()),
            ..Default::default()
        };

        let controller = initialize(&config);
        assert_eq!(controller.view().theme().name, "feed-light");
        assert!(controller.posts().is_empty());
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };

        let controller = initialize(&config);
        assert_eq!(controller.view().theme().name, "feed-dark");
    }

    #[test]
    fn initialize_falls_back_on_unreadable_theme_file() {
        let config = Config {
            theme_file: Some("/definitely/not/here.toml".to_string()),
            theme_name: Some("feed-light".to_string()),
            ..Default::default()
        };

        // The file takes precedence and its failure falls through to the
        // default, not to the named theme.
        let controller = initialize(&config);
        assert_eq!(controller.view().theme().name, "feed-dark");
    }
}
