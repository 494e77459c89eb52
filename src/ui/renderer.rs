//! Top-level rendering coordinator.
//!
//! Draws a computed view model to stdout: clears the screen, composes the
//! component renderers, and flushes so partial frames never linger in the
//! stdio buffer.

use std::io::{self, Write};

use crate::ui::components;
use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FeedViewModel;

/// Draws a full frame for the given view model.
///
/// Output goes to stdout as ANSI-styled text. The screen is cleared first;
/// the cursor ends parked on the footer row.
pub fn draw(vm: &FeedViewModel, theme: &Theme, rows: usize, cols: usize) {
    helpers::clear_screen();
    components::render_feed(vm, theme, cols, rows);
    let _ = io::stdout().flush();
}
