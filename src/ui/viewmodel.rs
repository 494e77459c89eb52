//! View model types representing renderable feed state.
//!
//! This module defines immutable view models computed from the post list.
//! View models contain only display-ready data: truncated text, formatted
//! reaction tallies, age labels, and layout counts. The renderer consumes
//! them without touching domain types.
//!
//! Computation lives here rather than on the state container because the
//! feed has no state-side filtering or selection; everything the screen
//! needs derives from the post slice the view was handed, plus the view's
//! own message banner.

use crate::domain::{Post, ReactionKind};
use crate::ui::helpers;

/// Rows one post card occupies: caption line, URL line, tally line,
/// separator.
const CARD_ROWS: usize = 4;

/// Rows reserved for chrome: leading blank, header, two borders, banner,
/// footer.
const CHROME_ROWS: usize = 6;

/// Complete feed view model for one frame.
#[derive(Debug, Clone)]
pub struct FeedViewModel {
    /// Cards for the posts that fit on screen, most recent first.
    pub cards: Vec<PostCard>,

    /// Number of older posts that did not fit.
    pub hidden_posts: usize,

    /// Header information (title with post count).
    pub header: HeaderInfo,

    /// Footer information (command hints).
    pub footer: FooterInfo,

    /// Optional message banner (validation and host messages).
    pub message: Option<MessageBanner>,

    /// Optional empty state, set when the feed has no posts.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single post.
#[derive(Debug, Clone)]
pub struct PostCard {
    /// Post identity, for the `#id` prefix and reaction commands.
    pub id: u64,

    /// Caption, truncated to the available width.
    pub caption: String,

    /// Image reference, truncated from the start so the filename survives.
    pub image_url: String,

    /// Formatted reaction tallies, e.g. `like 8 · wow 2 · laugh 1`.
    pub tallies: String,

    /// Human-readable age label, e.g. `3h ago`.
    pub age: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command hint text.
    pub hints: String,
}

/// Message banner display information.
#[derive(Debug, Clone)]
pub struct MessageBanner {
    /// Message text to display.
    pub text: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}

impl FeedViewModel {
    /// Computes a renderable view model from the post list and terminal
    /// dimensions.
    ///
    /// Handles windowing (older posts beyond the row budget are counted in
    /// [`hidden_posts`](Self::hidden_posts)), text truncation, tally
    /// formatting, and empty state handling.
    #[must_use]
    pub fn compute(
        posts: &[Post],
        message: Option<&str>,
        rows: usize,
        cols: usize,
    ) -> Self {
        let header = HeaderInfo {
            title: format!(" Photo Feed ({}) ", posts.len()),
        };
        let footer = FooterInfo {
            hints: "post <url> <caption>  react <id> <like|wow|laugh>  help  quit".to_string(),
        };
        let message = message.map(|text| MessageBanner {
            text: text.to_string(),
        });

        if posts.is_empty() {
            return Self {
                cards: vec![],
                hidden_posts: 0,
                header,
                footer,
                message,
                empty_state: Some(EmptyState {
                    message: "No posts yet".to_string(),
                    subtitle: "Share one with: post <image-url> <caption>".to_string(),
                }),
            };
        }

        let budget = rows.saturating_sub(CHROME_ROWS);
        let mut visible = (budget / CARD_ROWS).min(posts.len());
        if visible < posts.len() {
            // One row goes to the "older posts" line when anything is cut.
            visible = (budget.saturating_sub(1) / CARD_ROWS).min(posts.len());
        }
        let visible = visible.max(1);
        let hidden_posts = posts.len() - visible;

        let cards = posts[..visible]
            .iter()
            .map(|post| Self::compute_card(post, cols))
            .collect();

        Self {
            cards,
            hidden_posts,
            header,
            footer,
            message,
            empty_state: None,
        }
    }

    /// Computes the card for a single post within the visible window.
    fn compute_card(post: &Post, cols: usize) -> PostCard {
        let age = post.time_ago();

        // The id, caption, and right-aligned age label share the first
        // line; the caption width keeps them from colliding.
        let id_width = format!("#{}", post.id).len();
        let caption_width = cols.saturating_sub(id_width + age.len() + 8);
        let caption = helpers::truncate_end(&post.caption, caption_width);

        let image_url = helpers::truncate_start(&post.image_url, cols.saturating_sub(4));

        let tallies = ReactionKind::ALL
            .iter()
            .map(|&kind| format!("{kind} {}", post.reactions.get(kind)))
            .collect::<Vec<_>>()
            .join(" · ");

        PostCard {
            id: post.id,
            caption,
            image_url,
            tallies,
            age,
        }
    }
}
