//! Application layer coordinating state, events, and the view contract.
//!
//! This module holds the widget's control logic: the owned feed state, the
//! event handler that turns user intents into state transitions and view
//! side effects, and the controller that executes those effects against a
//! [`FeedView`] implementation.
//!
//! # Architecture
//!
//! ```text
//! Host input → Event → handle_event → FeedState mutation
//!                                         │
//!                              (render flag, Actions)
//!                                         │
//!                      FeedController → FeedView (render / message / form)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: View side-effect commands emitted by the event handler
//! - [`controller`]: The [`FeedView`] contract and [`FeedController`]
//! - [`handler`]: Event processing and state transition coordination
//! - [`state`]: The owned post list and identity counter

pub mod actions;
pub mod controller;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use controller::{FeedController, FeedView};
pub use handler::{handle_event, Event, MISSING_FIELDS_MESSAGE};
pub use state::FeedState;
