//! Platform path utilities.
//!
//! Resolves where the widget keeps its on-disk artifacts (currently the log
//! file) and expands tilde-prefixed paths supplied by the host, e.g. for
//! custom theme files.

use std::env;
use std::path::PathBuf;

/// Returns the data directory for photofeed artifacts.
///
/// Resolution order: `$XDG_DATA_HOME/photofeed`, then
/// `$HOME/.local/share/photofeed`, then a `photofeed` directory under the
/// system temp dir when neither variable is usable.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("photofeed");
        }
    }

    if let Some(home) = env::var_os("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("photofeed");
        }
    }

    env::temp_dir().join("photofeed")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde prefix, and paths on systems with no `HOME` set,
/// are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = env::var_os("HOME").filter(|h| !h.is_empty()) else {
        return path.to_string();
    };
    let home = PathBuf::from(home);

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
        assert_eq!(expand_tilde("relative/theme.toml"), "relative/theme.toml");
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        if let Some(home) = env::var_os("HOME").filter(|h| !h.is_empty()) {
            let expanded = expand_tilde("~/themes/custom.toml");
            assert!(expanded.starts_with(&*home.to_string_lossy()));
            assert!(expanded.ends_with("themes/custom.toml"));
        }
    }

    #[test]
    fn data_dir_ends_with_the_app_name() {
        assert!(data_dir().ends_with("photofeed"));
    }
}
