//! Message banner component renderer.
//!
//! Renders the single-line status/error banner under the header. The banner
//! row is always drawn (blank when no message is set) so clearing a message
//! on the next frame leaves no residue.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MessageBanner;

/// Renders the message banner at the specified row.
///
/// Draws the message text with the theme's message color, or a blank line
/// when `message` is `None`. The line is padded to the full terminal width.
/// Returns the next available row position.
pub fn render_banner(
    row: usize,
    message: Option<&MessageBanner>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    match message {
        Some(banner) => {
            let text_len = banner.text.chars().count().min(cols);
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.message_fg));
            print!("  {}", banner.text);
            print!("{}", " ".repeat(cols.saturating_sub(text_len + 2)));
            print!("{}", Theme::reset());
        }
        None => {
            print!("{}", " ".repeat(cols));
        }
    }

    row + 1
}
