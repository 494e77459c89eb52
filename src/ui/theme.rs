//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the terminal view,
//! supporting the built-in themes and custom themes loaded from TOML files,
//! plus utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `feed-dark`: dark palette (default)
//! - `feed-light`: light palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! header_bg = "#313244"      # optional
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! caption_fg = "#f5e0dc"
//! count_fg = "#f9e2af"
//! message_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{FeedError, Result};

/// Color scheme configuration for feed rendering.
///
/// Contains theme metadata and color definitions. Loaded from a built-in
/// theme or a custom TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all feed UI elements.
///
/// Colors are hex strings (e.g., "#cdd6f4"). The optional header background
/// defaults to `None`, letting a theme opt out of that styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, image URLs, age labels).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Post caption color.
    pub caption_fg: String,
    /// Reaction tally color.
    pub count_fg: String,

    /// Message banner color (validation and host messages).
    pub message_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `feed-dark`, `feed-light`. Returns `None` for
    /// anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "feed-dark" => include_str!("../../themes/feed-dark.toml"),
            "feed-light" => include_str!("../../themes/feed-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Io`] if the file cannot be read and
    /// [`FeedError::Theme`] if the TOML content does not describe a valid
    /// theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| FeedError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a leading `#` if present; falls back to white on anything
    /// that is not six hex digits.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`feed-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which cannot happen for
    /// a shipped build.
    fn default() -> Self {
        Self::from_name("feed-dark").expect("built-in feed-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_load_by_name() {
        let dark = Theme::from_name("feed-dark").unwrap();
        assert_eq!(dark.name, "feed-dark");
        assert!(dark.colors.header_bg.is_some());

        let light = Theme::from_name("feed-light").unwrap();
        assert_eq!(light.name, "feed-light");
        assert!(light.colors.header_bg.is_none());
    }

    #[test]
    fn unknown_theme_name_is_none() {
        assert!(Theme::from_name("neon-nonsense").is_none());
    }

    #[test]
    fn default_theme_is_feed_dark() {
        assert_eq!(Theme::default().name, "feed-dark");
    }

    #[test]
    fn theme_loads_from_a_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            include_str!("../../themes/feed-light.toml").replace("feed-light", "custom")
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FeedError::Theme(_)));
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let err = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }

    #[test]
    fn hex_colors_become_ansi_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("00ff00"), "\u{001b}[48;2;0;255;0m");
        // Malformed input falls back to white rather than corrupting output.
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }
}
