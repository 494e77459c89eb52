//! Empty state component renderer.
//!
//! Renders the message displayed when the feed has no posts, centered both
//! horizontally and vertically in the card area.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// The primary text lands just above the vertical midpoint in the empty
/// state color, with the dimmed subtitle directly below it.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize, rows: usize) {
    let midpoint = (rows / 2).max(2);

    print_centered(
        midpoint - 1,
        &empty.message,
        &Theme::fg(&theme.colors.empty_state_fg),
        cols,
    );
    print_centered(
        midpoint,
        &empty.subtitle,
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        cols,
    );
}

/// Prints one horizontally centered, styled line padded to the full width.
fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);

    position_cursor(row, 1);
    print!(
        "{style}{pad_l}{text}{pad_r}{reset}",
        pad_l = " ".repeat(left),
        pad_r = " ".repeat(right),
        reset = Theme::reset(),
    );
}
