//! Composable UI component renderers.
//!
//! Each component renders one part of the feed screen; [`render_feed`]
//! composes them into the full layout. Components print ANSI-styled output
//! at absolute cursor positions and return the next free row.
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Message banner (or blank)]
//! [Post cards]
//! [Older-posts notice, when cut]
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```

mod banner;
mod card;
mod empty;
mod footer;
mod header;

pub use banner::render_banner;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FeedViewModel;

use card::{render_cards, render_hidden_notice};
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;

/// Row the message banner occupies, shared with the terminal view so a
/// validation message can be painted without a full redraw.
pub const BANNER_ROW: usize = 4;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full feed layout from a view model.
///
/// Chrome (header, banner, borders, footer) is always drawn; the middle is
/// either the post cards or the empty state.
pub fn render_feed(vm: &FeedViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    debug_assert_eq!(current_row, BANNER_ROW);
    current_row = render_banner(current_row, vm.message.as_ref(), theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols, rows);
    } else {
        let body_end = render_cards(current_row, &vm.cards, theme, cols);
        if vm.hidden_posts > 0 {
            render_hidden_notice(body_end, vm.hidden_posts, theme);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
