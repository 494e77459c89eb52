//! Terminal rendering layer with component-based architecture.
//!
//! This module turns the post list into ANSI-styled output through immutable
//! view models and composable rendering components, with theme support and
//! responsive truncation.
//!
//! # Architecture
//!
//! ```text
//! &[Post] → FeedViewModel::compute → components → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and computation
//! - [`renderer`]: Top-level frame drawing
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Cursor addressing and truncation utilities
//! - [`theme`]: Color schemes and ANSI escape generation
//! - [`terminal`]: [`TerminalView`], the bundled
//!   [`FeedView`](crate::app::FeedView) implementation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use terminal::TerminalView;
pub use theme::Theme;
pub use viewmodel::{EmptyState, FeedViewModel, FooterInfo, HeaderInfo, MessageBanner, PostCard};
