//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user intents,
//! translating them into state changes and view side effects. It is the only
//! control-flow coordinator in the widget: every mutation of the feed goes
//! through [`handle_event`].
//!
//! # Data flow
//!
//! ```text
//! Host input → Event → handle_event → FeedState mutation → (render?, Actions)
//! ```
//!
//! The returned boolean tells the controller whether the full list must be
//! re-rendered; the actions are executed against the view first, in order.
//!
//! # Example
//!
//! ```
//! use photofeed::{handle_event, Event, FeedState};
//!
//! let mut state = FeedState::new();
//! let event = Event::CreatePost {
//!     image_url: "https://example.com/a.png".into(),
//!     caption: "First".into(),
//! };
//! let (should_render, actions) = handle_event(&mut state, &event)?;
//! assert!(should_render);
//! assert_eq!(state.posts().len(), 1);
//! # let _ = actions;
//! # Ok::<(), photofeed::FeedError>(())
//! ```

use crate::app::{Action, FeedState};
use crate::domain::error::Result;
use crate::domain::ReactionKind;

/// Message shown when a post is submitted without an image URL or caption.
pub const MISSING_FIELDS_MESSAGE: &str = "Add an image URL and a caption.";

/// User intents the feed reacts to.
///
/// These are the widget's two entry points for mutation, expressed as data
/// so hosts can route any input mechanism (key handling, form submission,
/// line commands) into the same handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Submit a new post with the given image reference and caption.
    ///
    /// Both fields must contain non-blank text; otherwise the submission is
    /// rejected with a user-facing message and the feed is unchanged.
    CreatePost {
        /// Text reference to the image resource.
        image_url: String,
        /// Caption text.
        caption: String,
    },

    /// Record one reaction on an existing post.
    ///
    /// Silently ignored when no post has the given identity.
    React {
        /// Identity of the post to react to.
        post_id: u64,
        /// Which tally to increment.
        kind: ReactionKind,
    },
}

/// Processes an event, mutates feed state, and returns view side effects.
///
/// # Returns
///
/// A tuple of (re-render flag, actions). The flag is `true` exactly when the
/// post list changed; the actions are the view effects to execute before
/// rendering.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for hosts
/// as handling grows. A rejected submission is reported through
/// [`Action::ShowMessage`], not an error.
pub fn handle_event(state: &mut FeedState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::CreatePost { image_url, caption } => {
            if image_url.trim().is_empty() || caption.trim().is_empty() {
                tracing::debug!(
                    has_image_url = !image_url.trim().is_empty(),
                    has_caption = !caption.trim().is_empty(),
                    "post submission rejected"
                );
                return Ok((
                    false,
                    vec![Action::ShowMessage(MISSING_FIELDS_MESSAGE.to_string())],
                ));
            }

            let post = state.create_post(image_url, caption);
            tracing::debug!(post_id = post.id, "post accepted");

            Ok((true, vec![Action::ClearMessage, Action::ResetForm]))
        }
        Event::React { post_id, kind } => {
            if state.apply_reaction(*post_id, *kind) {
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::CreatePost { .. } => "CreatePost",
        Event::React { .. } => "React",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReactionCounts;

    fn seeded_state() -> FeedState {
        let mut state = FeedState::new();
        state.seed();
        state
    }

    fn create(image_url: &str, caption: &str) -> Event {
        Event::CreatePost {
            image_url: image_url.to_string(),
            caption: caption.to_string(),
        }
    }

    #[test]
    fn valid_submission_prepends_and_requests_render() {
        let mut state = seeded_state();

        let (should_render, actions) =
            handle_event(&mut state, &create("https://example.com/i.png", "hello")).unwrap();

        assert!(should_render);
        assert_eq!(actions, vec![Action::ClearMessage, Action::ResetForm]);
        assert_eq!(state.posts().len(), 3);
        assert_eq!(state.posts()[0].id, 3);
        assert_eq!(state.posts()[0].caption, "hello");
    }

    #[test]
    fn missing_image_url_is_rejected_with_message() {
        let mut state = seeded_state();

        let (should_render, actions) = handle_event(&mut state, &create("", "caption")).unwrap();

        assert!(!should_render);
        assert_eq!(
            actions,
            vec![Action::ShowMessage(MISSING_FIELDS_MESSAGE.to_string())]
        );
        assert_eq!(state.posts().len(), 2);
    }

    #[test]
    fn missing_caption_is_rejected_with_message() {
        let mut state = seeded_state();

        let (should_render, actions) =
            handle_event(&mut state, &create("https://example.com/i.png", "")).unwrap();

        assert!(!should_render);
        assert_eq!(
            actions,
            vec![Action::ShowMessage(MISSING_FIELDS_MESSAGE.to_string())]
        );
        assert_eq!(state.posts().len(), 2);
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let mut state = seeded_state();

        let (should_render, actions) = handle_event(&mut state, &create("   ", "\t")).unwrap();

        assert!(!should_render);
        assert_eq!(
            actions,
            vec![Action::ShowMessage(MISSING_FIELDS_MESSAGE.to_string())]
        );
        assert_eq!(state.posts().len(), 2);
    }

    #[test]
    fn rejected_submission_does_not_consume_an_identity() {
        let mut state = seeded_state();

        handle_event(&mut state, &create("", "")).unwrap();
        let (_, _) = handle_event(&mut state, &create("u.png", "cap")).unwrap();

        assert_eq!(state.posts()[0].id, 3);
    }

    #[test]
    fn reaction_on_known_post_bumps_one_counter() {
        let mut state = seeded_state();

        let (should_render, actions) = handle_event(
            &mut state,
            &Event::React {
                post_id: 1,
                kind: ReactionKind::Like,
            },
        )
        .unwrap();

        assert!(should_render);
        assert!(actions.is_empty());
        assert_eq!(
            state.find_post(1).unwrap().reactions,
            ReactionCounts::new(9, 2, 1)
        );
        assert_eq!(
            state.find_post(2).unwrap().reactions,
            ReactionCounts::new(5, 1, 0)
        );
    }

    #[test]
    fn reaction_on_unknown_post_is_a_silent_noop() {
        let mut state = seeded_state();

        let (should_render, actions) = handle_event(
            &mut state,
            &Event::React {
                post_id: 999,
                kind: ReactionKind::Wow,
            },
        )
        .unwrap();

        assert!(!should_render);
        assert!(actions.is_empty());
        assert_eq!(state.posts().len(), 2);
    }
}
