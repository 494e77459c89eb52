//! Post domain model and reaction tallies.
//!
//! This module defines the core `Post` type representing one feed entry, the
//! closed set of [`ReactionKind`]s users can respond with, and the
//! [`ReactionCounts`] tally attached to every post. Posts track their creation
//! time for user-friendly age formatting in the feed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::FeedError;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// One of the fixed reaction kinds a post can be tallied under.
///
/// The set is closed: a reaction that is not `like`, `wow` or `laugh` is not
/// representable. Text input is converted at the host boundary via
/// [`FromStr`], which rejects anything else with
/// [`FeedError::UnknownReaction`].
///
/// # Example
///
/// ```
/// use photofeed::ReactionKind;
///
/// let kind: ReactionKind = "wow".parse().unwrap();
/// assert_eq!(kind, ReactionKind::Wow);
/// assert!("boom".parse::<ReactionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    /// A plain approval.
    Like,
    /// Astonishment.
    Wow,
    /// Amusement.
    Laugh,
}

impl ReactionKind {
    /// Every defined reaction kind, in display order.
    pub const ALL: [Self; 3] = [Self::Like, Self::Wow, Self::Laugh];

    /// Returns the lowercase wire/display name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Wow => "wow",
            Self::Laugh => "laugh",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = FeedError;

    /// Parses a reaction kind from text, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::UnknownReaction`] for any text outside the
    /// defined set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "wow" => Ok(Self::Wow),
            "laugh" => Ok(Self::Laugh),
            _ => Err(FeedError::UnknownReaction(s.to_string())),
        }
    }
}

/// Reaction tally for a single post: one non-negative counter per kind.
///
/// Counters only ever grow. There is no decrement or reset operation, so a
/// count observed once is a floor for the rest of the post's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionCounts {
    /// Number of `like` reactions.
    pub like: u32,
    /// Number of `wow` reactions.
    pub wow: u32,
    /// Number of `laugh` reactions.
    pub laugh: u32,
}

impl ReactionCounts {
    /// Creates a tally with explicit starting counts.
    #[must_use]
    pub const fn new(like: u32, wow: u32, laugh: u32) -> Self {
        Self { like, wow, laugh }
    }

    /// Returns the current count for one kind.
    #[must_use]
    pub const fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Wow => self.wow,
            ReactionKind::Laugh => self.laugh,
        }
    }

    /// Increments the counter for `kind` by exactly one.
    pub fn bump(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Like => self.like += 1,
            ReactionKind::Wow => self.wow += 1,
            ReactionKind::Laugh => self.laugh += 1,
        }
    }

    /// Returns the sum of all counters.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.like + self.wow + self.laugh
    }
}

/// Represents one entry in the photo feed.
///
/// A post carries an identity assigned by the feed state at creation time, an
/// opaque image reference, a caption, its reaction tally, and the creation
/// timestamp used for age display. Identity is never reused or changed;
/// content validation happens before construction, in the event handler.
///
/// # Example
///
/// ```
/// use photofeed::{Post, ReactionKind};
///
/// let mut post = Post::new(1, "https://example.com/a.png".into(), "First light".into());
/// assert_eq!(post.reactions.total(), 0);
///
/// post.add_reaction(ReactionKind::Like);
/// assert_eq!(post.reactions.like, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique positive identity, assigned monotonically at creation.
    pub id: u64,
    /// Text reference to the image resource; opaque to the widget.
    pub image_url: String,
    /// Caption text shown with the image.
    pub caption: String,
    /// Reaction tally, increment-only.
    pub reactions: ReactionCounts,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Post {
    /// Creates a post with all reaction counters at zero.
    ///
    /// `created_at` is set to the current time. No validation is performed on
    /// `image_url` or `caption` at this layer.
    #[must_use]
    pub fn new(id: u64, image_url: String, caption: String) -> Self {
        Self::with_reactions(id, image_url, caption, ReactionCounts::default())
    }

    /// Creates a post with preset reaction counters.
    ///
    /// Kinds the caller does not care about are covered by struct-update on
    /// [`ReactionCounts::default`], e.g.
    /// `ReactionCounts { like: 5, ..Default::default() }`.
    #[must_use]
    pub fn with_reactions(
        id: u64,
        image_url: String,
        caption: String,
        reactions: ReactionCounts,
    ) -> Self {
        Self {
            id,
            image_url,
            caption,
            reactions,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Increments the counter for `kind` by exactly one.
    ///
    /// Identity and content are untouched.
    pub fn add_reaction(&mut self, kind: ReactionKind) {
        self.reactions.bump(kind);
    }

    /// Returns a human-readable string describing how long ago the post was
    /// created.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn time_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.created_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_starts_with_zeroed_reactions() {
        let post = Post::new(1, "image.jpg".into(), "Test Caption".into());

        assert_eq!(post.id, 1);
        assert_eq!(post.image_url, "image.jpg");
        assert_eq!(post.caption, "Test Caption");
        assert_eq!(post.reactions, ReactionCounts::default());
    }

    #[test]
    fn preset_reactions_leave_unspecified_kinds_at_zero() {
        let post = Post::with_reactions(
            7,
            "image.jpg".into(),
            "Preset".into(),
            ReactionCounts {
                like: 5,
                ..Default::default()
            },
        );

        assert_eq!(post.reactions.like, 5);
        assert_eq!(post.reactions.wow, 0);
        assert_eq!(post.reactions.laugh, 0);
    }

    #[test]
    fn add_reaction_increments_only_the_given_kind() {
        let mut post = Post::new(2, "another.png".into(), "Another Post".into());

        post.add_reaction(ReactionKind::Like);
        assert_eq!(post.reactions.like, 1);
        assert_eq!(post.reactions.wow, 0);
        assert_eq!(post.reactions.laugh, 0);

        post.add_reaction(ReactionKind::Like);
        assert_eq!(post.reactions.like, 2);

        post.add_reaction(ReactionKind::Wow);
        assert_eq!(post.reactions.wow, 1);
        assert_eq!(post.reactions.like, 2);

        post.add_reaction(ReactionKind::Laugh);
        assert_eq!(post.reactions.laugh, 1);
        assert_eq!(post.reactions.wow, 1);
    }

    #[test]
    fn three_likes_on_a_fresh_post() {
        let mut post = Post::new(3, "multi.gif".into(), "Tally".into());

        post.add_reaction(ReactionKind::Like);
        post.add_reaction(ReactionKind::Like);
        post.add_reaction(ReactionKind::Like);

        assert_eq!(post.reactions, ReactionCounts::new(3, 0, 0));
        assert_eq!(post.reactions.total(), 3);
    }

    #[test]
    fn reaction_kind_parses_known_names() {
        assert_eq!("like".parse::<ReactionKind>().unwrap(), ReactionKind::Like);
        assert_eq!("WOW".parse::<ReactionKind>().unwrap(), ReactionKind::Wow);
        assert_eq!(
            " laugh ".parse::<ReactionKind>().unwrap(),
            ReactionKind::Laugh
        );
    }

    #[test]
    fn reaction_kind_rejects_unknown_names() {
        let err = "boom".parse::<ReactionKind>().unwrap_err();
        assert!(matches!(err, FeedError::UnknownReaction(ref s) if s == "boom"));
    }

    #[test]
    fn reaction_kind_displays_lowercase_name() {
        assert_eq!(ReactionKind::Laugh.to_string(), "laugh");
        for kind in ReactionKind::ALL {
            assert_eq!(kind.as_str().parse::<ReactionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn time_ago_buckets_by_elapsed_time() {
        let mut post = Post::new(4, "clock.png".into(), "Ages".into());
        assert_eq!(post.time_ago(), "just now");

        post.created_at = chrono::Utc::now().timestamp() - 300;
        assert_eq!(post.time_ago(), "5m ago");

        post.created_at = chrono::Utc::now().timestamp() - 3 * SECONDS_PER_HOUR;
        assert_eq!(post.time_ago(), "3h ago");

        post.created_at = chrono::Utc::now().timestamp() - 7 * SECONDS_PER_DAY;
        assert_eq!(post.time_ago(), "7d ago");
    }

    #[test]
    fn post_round_trips_through_json() {
        let post = Post::with_reactions(
            9,
            "https://example.com/9.png".into(),
            "Round trip".into(),
            ReactionCounts::new(8, 2, 1),
        );

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"like\":8"));

        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn reaction_kind_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&ReactionKind::Wow).unwrap();
        assert_eq!(json, "\"wow\"");
    }
}
