//! # Linepad UI
//!
//! Desktop front-end using the iced framework.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: `App`, which wraps the core `EditorController`
//! - **Message**: Clicks, edits and key presses
//! - **Update**: Turns messages into `Intent`s and runs the returned `Effect`s
//! - **View**: Gutter and lines rendered from controller state
//!
//! The UI never edits lines itself; every change goes through the
//! controller so the gutter, cache and active flag stay in step.

pub mod app;
pub mod platform;
pub mod style;
pub mod theme;
pub mod widget;

pub use app::{run, App};
pub use platform::{ArboardClipboard, DialogNotifier};
