//! View contract and the controller that drives it.
//!
//! This module defines [`FeedView`], the capability set the widget needs from
//! a rendering layer, and [`FeedController`], the orchestrator that owns the
//! feed state and a view and wires them together. The controller is the sole
//! authority for creating posts and recording reactions: hosts feed it
//! [`Event`]s (or call the named entry points) and it takes care of
//! validation, mutation, view messaging, and re-rendering.
//!
//! # Control flow
//!
//! Each call runs synchronously to completion:
//!
//! ```text
//! handle_event → handler::handle_event → execute actions on view → render?
//! ```
//!
//! There is no event loop and no async dispatch; the host decides when
//! events happen.

use crate::app::handler;
use crate::app::{Action, Event, FeedState};
use crate::domain::error::Result;
use crate::domain::{Post, ReactionKind};

/// Capability set the controller requires from a rendering layer.
///
/// [`TerminalView`](crate::ui::TerminalView) is the bundled implementation;
/// hosts embedding the widget elsewhere provide their own. Implementations
/// never mutate posts: `render` receives the list read-only and the
/// remaining methods only concern view-local state (message banner, input
/// form).
pub trait FeedView {
    /// (Re)draws the full current post list, most recent first.
    ///
    /// Called once at initialization and after every successful mutation.
    fn render(&mut self, posts: &[Post]);

    /// Displays a user-visible status or error string.
    fn show_message(&mut self, text: &str);

    /// Clears any displayed status or error string.
    fn clear_message(&mut self);

    /// Clears the input fields after a successful post creation.
    fn reset_form(&mut self);
}

/// Mediates between a view and the post list.
///
/// Owns both the [`FeedState`] and the view; nothing outside the controller
/// mutates either. See the [module docs](self) for the control flow.
#[derive(Debug)]
pub struct FeedController<V: FeedView> {
    state: FeedState,
    view: V,
}

impl<V: FeedView> FeedController<V> {
    /// Creates a controller over an empty feed.
    ///
    /// Call [`init`](Self::init) to seed the demonstration posts and draw
    /// the first frame.
    #[must_use]
    pub fn new(view: V) -> Self {
        Self {
            state: FeedState::new(),
            view,
        }
    }

    /// Seeds the demonstration posts and triggers the initial render.
    ///
    /// Seeding happens at most once per controller; calling `init` again
    /// only re-renders the current list.
    pub fn init(&mut self) {
        self.state.seed();
        self.view.render(self.state.posts());
    }

    /// Processes one event: mutate, message, render.
    ///
    /// Actions requested by the handler are executed against the view in
    /// order, then the full list is re-rendered if the handler flagged a
    /// change.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler. Rejected submissions are
    /// not errors; they surface through the view's message banner.
    pub fn handle_event(&mut self, event: &Event) -> Result<()> {
        let (should_render, actions) = handler::handle_event(&mut self.state, event)?;

        for action in &actions {
            self.execute_action(action);
        }

        if should_render {
            self.view.render(self.state.posts());
        }

        Ok(())
    }

    /// Submits a new post; see [`Event::CreatePost`].
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn handle_create_post(&mut self, image_url: &str, caption: &str) -> Result<()> {
        self.handle_event(&Event::CreatePost {
            image_url: image_url.to_string(),
            caption: caption.to_string(),
        })
    }

    /// Records one reaction; see [`Event::React`].
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn handle_react(&mut self, post_id: u64, kind: ReactionKind) -> Result<()> {
        self.handle_event(&Event::React { post_id, kind })
    }

    /// Read access to the post list, most recent first.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        self.state.posts()
    }

    /// Read access to the view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view, for host-side messaging.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::ShowMessage(text) => {
                tracing::debug!(message = %text, "showing view message");
                self.view.show_message(text);
            }
            Action::ClearMessage => self.view.clear_message(),
            Action::ResetForm => self.view.reset_form(),
        }
    }
}
