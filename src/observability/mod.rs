//! Structured logging for the widget.
//!
//! The crate instruments its state transitions with `tracing` spans and
//! events; this module wires up the subscriber that makes them visible.
//! Output goes to `<data-dir>/photofeed.log` so the terminal stays clean
//! for rendering.
//!
//! # Configuration
//!
//! The filter level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. The `trace_level` configuration option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
