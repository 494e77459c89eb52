//! Feed state container: the owned post list and identity counter.
//!
//! This module defines [`FeedState`], the single source of truth for the
//! widget. It owns the ordered post list (most recent first) and the
//! next-identity counter, and is the only place posts are created or
//! mutated. Views receive read access through [`FeedState::posts`]; all
//! writes go through the methods here, driven by the event handler.
//!
//! # Ordering
//!
//! New posts are prepended, so index 0 is always the most recent entry.
//! Seed posts are inserted in declared order at initialization and age
//! backwards from there.

use crate::domain::{Post, ReactionCounts, ReactionKind};

/// Demonstration posts inserted by [`FeedState::seed`]: image reference,
/// caption, preset tally, and age in seconds at seed time.
const DEMO_POSTS: [(&str, &str, ReactionCounts, i64); 2] = [
    (
        "https://images.unsplash.com/photo-1586348943529-beaae6c28db9",
        "Sunset vibes",
        ReactionCounts::new(8, 2, 1),
        3 * 3600,
    ),
    (
        "https://images.unsplash.com/photo-1705743244403-337b88a69b71",
        "Weekend coffee break",
        ReactionCounts::new(5, 1, 0),
        26 * 3600,
    ),
];

/// Central feed state container.
///
/// Holds the post list and assigns identities. Fields are private: only the
/// mutation methods below touch the list, which keeps the single-writer
/// discipline checkable at the module boundary.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    /// Ordered post list, most recent first.
    posts: Vec<Post>,
    /// Next identity to assign; identities are never reused.
    next_id: u64,
    /// Whether the demonstration posts have been inserted.
    seeded: bool,
}

impl FeedState {
    /// Creates an empty feed with the identity counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
            seeded: false,
        }
    }

    /// Read access to the post list, most recent first.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Returns the post with the given identity, if present.
    ///
    /// Identities are unique, so there is at most one match.
    #[must_use]
    pub fn find_post(&self, post_id: u64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }

    /// Creates a post with the next identity and prepends it to the list.
    ///
    /// Content validation happens in the event handler before this is
    /// called; this method only assigns identity and position.
    pub fn create_post(&mut self, image_url: &str, caption: &str) -> &Post {
        let id = self.alloc_id();
        let post = Post::new(id, image_url.to_string(), caption.to_string());
        self.posts.insert(0, post);

        tracing::debug!(post_id = id, total_posts = self.posts.len(), "post created");
        &self.posts[0]
    }

    /// Increments the tally for `kind` on the post with identity `post_id`.
    ///
    /// Returns `true` if the post was found and updated, `false` if no post
    /// has that identity (in which case nothing changes).
    pub fn apply_reaction(&mut self, post_id: u64, kind: ReactionKind) -> bool {
        let Some(post) = self.posts.iter_mut().find(|post| post.id == post_id) else {
            tracing::debug!(post_id, "reaction for unknown post ignored");
            return false;
        };

        post.add_reaction(kind);
        tracing::debug!(post_id, kind = %kind, count = post.reactions.get(kind), "reaction recorded");
        true
    }

    /// Inserts the demonstration posts, exactly once.
    ///
    /// Repeated calls are no-ops, so re-running initialization cannot
    /// duplicate the demo entries. The posts are aged backwards so the feed
    /// shows a spread of timestamps.
    pub fn seed(&mut self) {
        if self.seeded {
            tracing::debug!("demo posts already seeded, skipping");
            return;
        }
        self.seeded = true;

        let now = chrono::Utc::now().timestamp();
        for (image_url, caption, reactions, age) in DEMO_POSTS {
            let id = self.alloc_id();
            let mut post =
                Post::with_reactions(id, image_url.to_string(), caption.to_string(), reactions);
            post.created_at = now - age;
            self.posts.push(post);
        }

        tracing::debug!(post_count = self.posts.len(), "demo posts seeded");
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_inserts_two_posts_with_preset_tallies() {
        let mut state = FeedState::new();
        state.seed();

        let posts = state.posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].reactions, ReactionCounts::new(8, 2, 1));
        assert_eq!(posts[1].id, 2);
        assert_eq!(posts[1].reactions, ReactionCounts::new(5, 1, 0));
    }

    #[test]
    fn seed_is_idempotent() {
        let mut state = FeedState::new();
        state.seed();
        state.seed();

        assert_eq!(state.posts().len(), 2);
        // The identity counter must not have advanced past the two seeds.
        let post = state.create_post("u.png", "next");
        assert_eq!(post.id, 3);
    }

    #[test]
    fn create_post_prepends_and_assigns_monotonic_ids() {
        let mut state = FeedState::new();
        state.seed();

        state.create_post("a.png", "first");
        let newest = state.create_post("b.png", "second");
        assert_eq!(newest.id, 4);

        let posts = state.posts();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].caption, "second");
        assert_eq!(posts[1].caption, "first");
        assert_eq!(posts[2].id, 1);
    }

    #[test]
    fn apply_reaction_updates_only_the_target_post() {
        let mut state = FeedState::new();
        state.seed();

        assert!(state.apply_reaction(1, ReactionKind::Like));

        assert_eq!(state.find_post(1).unwrap().reactions, ReactionCounts::new(9, 2, 1));
        assert_eq!(state.find_post(2).unwrap().reactions, ReactionCounts::new(5, 1, 0));
    }

    #[test]
    fn apply_reaction_on_unknown_id_changes_nothing() {
        let mut state = FeedState::new();
        state.seed();
        let before = state.posts().to_vec();

        assert!(!state.apply_reaction(999, ReactionKind::Wow));
        assert_eq!(state.posts(), &before[..]);
    }

    #[test]
    fn find_post_matches_by_identity() {
        let mut state = FeedState::new();
        state.seed();

        assert_eq!(state.find_post(2).unwrap().caption, "Weekend coffee break");
        assert!(state.find_post(42).is_none());
    }
}
