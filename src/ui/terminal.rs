//! Terminal implementation of the feed view contract.
//!
//! [`TerminalView`] renders the feed to stdout with ANSI styling and owns
//! the view-local state the contract implies: the message banner. A full
//! render recomputes the view model from the post list it is handed; showing
//! a message repaints only the banner row, matching the rule that a rejected
//! submission must not trigger a re-render.

use std::io::{self, Write};

use crate::app::FeedView;
use crate::domain::Post;
use crate::ui::components::{self, BANNER_ROW};
use crate::ui::renderer;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeedViewModel, MessageBanner};

/// ANSI terminal view for the photo feed.
#[derive(Debug)]
pub struct TerminalView {
    theme: Theme,
    rows: usize,
    cols: usize,
    message: Option<String>,
}

impl TerminalView {
    /// Creates a view for a terminal of the given dimensions.
    #[must_use]
    pub fn new(theme: Theme, rows: usize, cols: usize) -> Self {
        Self {
            theme,
            rows,
            cols,
            message: None,
        }
    }

    /// The currently displayed message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn paint_banner(&self) {
        let banner = self.message.as_ref().map(|text| MessageBanner {
            text: text.clone(),
        });
        components::render_banner(BANNER_ROW, banner.as_ref(), &self.theme, self.cols);
        let _ = io::stdout().flush();
    }
}

impl FeedView for TerminalView {
    fn render(&mut self, posts: &[Post]) {
        let vm = FeedViewModel::compute(posts, self.message.as_deref(), self.rows, self.cols);
        renderer::draw(&vm, &self.theme, self.rows, self.cols);
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
        // Only the banner row is repainted; the list on screen is still
        // current because a rejected submission changes nothing else.
        self.paint_banner();
    }

    fn clear_message(&mut self) {
        if self.message.take().is_some() {
            self.paint_banner();
        }
    }

    fn reset_form(&mut self) {
        // Line-oriented input leaves nothing to clear between commands.
        tracing::debug!("form reset requested");
    }
}
