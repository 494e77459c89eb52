//! Actions representing view side effects requested by the event handler.
//!
//! The event handler stays pure: it mutates [`FeedState`](crate::app::FeedState)
//! and returns a list of [`Action`]s describing what the view should do next.
//! The controller executes them in order against its
//! [`FeedView`](crate::app::FeedView), then re-renders if the handler asked
//! for it. This keeps every state transition testable without a view attached.

/// Commands for the view, produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Display a user-visible status or error string.
    ///
    /// Emitted when post creation is rejected for missing fields; the text is
    /// the complete, user-facing message.
    ShowMessage(String),

    /// Clear any displayed status or error string.
    ///
    /// Emitted on successful post creation so a stale rejection message does
    /// not linger next to the new post.
    ClearMessage,

    /// Clear the view's input fields after a successful post creation.
    ResetForm,
}
