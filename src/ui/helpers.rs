//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor addressing,
//! screen clearing, and character-safe text truncation for responsive
//! layouts.

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the screen and homes the cursor.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Truncates text to at most `max` characters, ending with `...` when cut.
///
/// Operates on characters, not bytes, so multi-byte captions cannot split a
/// code point.
#[must_use]
pub fn truncate_end(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Truncates text to at most `max` characters, keeping the tail and
/// prefixing `...` when cut.
///
/// Used for image URLs, where the trailing path segment is the part worth
/// reading.
#[must_use]
pub fn truncate_start(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(3);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_end("hello", 10), "hello");
        assert_eq!(truncate_start("hello", 10), "hello");
    }

    #[test]
    fn truncate_end_cuts_and_marks() {
        assert_eq!(truncate_end("hello world", 8), "hello...");
    }

    #[test]
    fn truncate_start_keeps_the_tail() {
        assert_eq!(truncate_start("https://example.com/tail.png", 11), "...tail.png");
    }

    #[test]
    fn truncation_is_character_safe() {
        let text = "éééééééééé";
        assert_eq!(truncate_end(text, 5).chars().count(), 5);
        assert_eq!(truncate_start(text, 5).chars().count(), 5);
    }
}
