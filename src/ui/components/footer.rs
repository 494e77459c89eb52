//! Footer component renderer.
//!
//! Renders the dimmed command-hint bar at the bottom of the feed, indented
//! to line up with the post cards and truncated on narrow terminals.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer hint bar at the specified row.
///
/// Hints that do not fit the terminal width are truncated with an ellipsis
/// rather than wrapped, so the layout cannot gain an extra row. Returns the
/// next available row position.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints = helpers::truncate_end(&footer.hints, cols.saturating_sub(2));
    let fill = cols.saturating_sub(hints.chars().count() + 2);

    position_cursor(row, 1);
    print!(
        "{fg}  {hints}{padding}{reset}",
        fg = Theme::fg(&theme.colors.text_dim),
        padding = " ".repeat(fill),
        reset = Theme::reset(),
    );
    row + 1
}
