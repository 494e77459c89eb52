//! Header component renderer.
//!
//! Renders the feed title bar: the title centered in a full-width line so an
//! optional background color forms a solid bar.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// Returns the next available row position.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let left = cols.saturating_sub(title_len) / 2;
    let right = cols.saturating_sub(left + title_len);

    let line = format!(
        "{spaces_l}{title}{spaces_r}",
        spaces_l = " ".repeat(left),
        title = header.title,
        spaces_r = " ".repeat(right),
    );

    let background = theme
        .colors
        .header_bg
        .as_deref()
        .map(Theme::bg)
        .unwrap_or_default();

    position_cursor(row, 1);
    print!(
        "{bold}{fg}{background}{line}{reset}",
        bold = Theme::bold(),
        fg = Theme::fg(&theme.colors.header_fg),
        reset = Theme::reset(),
    );
    row + 1
}
