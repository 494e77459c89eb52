//! Error types for the photofeed widget.
//!
//! This module defines the centralized error type [`FeedError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! Note that a rejected post submission is *not* an error in this taxonomy: the
//! controller reports it to the user through the view's message banner and the
//! call still succeeds. `FeedError` covers programmer-facing failures only.

use thiserror::Error;

/// The main error type for photofeed operations.
///
/// Consolidates the failure conditions that can occur while embedding or
/// driving the widget: rejecting text that names no known reaction kind,
/// and loading a custom theme.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Text did not name one of the defined reaction kinds.
    ///
    /// Returned when parsing reaction input at the host boundary. The core
    /// API takes [`ReactionKind`](crate::domain::ReactionKind) directly, so
    /// an unrecognized kind can only arise from text input.
    #[error("unknown reaction kind: {0}")]
    UnknownReaction(String),

    /// Theme loading or parsing failed.
    ///
    /// Occurs when a custom theme file cannot be deserialized. The string
    /// describes what went wrong.
    #[error("theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, converted
    /// automatically via the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for photofeed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
