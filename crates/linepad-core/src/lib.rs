//! # Linepad Core
//!
//! Line editor state machine and the pieces around it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     EditorController                      │
//! │   Intent ──▶ dispatch ──▶ Vec<Effect>    EventBus ──▶ …   │
//! │         │                                                 │
//! │  ┌──────┴──────┐ ┌──────────────┐ ┌───────────────┐       │
//! │  │ EditorModel │ │  EditorView  │ │ NumberRowView │       │
//! │  └─────────────┘ │ (LineStore)  │ │   (gutter)    │       │
//! │                  └──────────────┘ └───────────────┘       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller is the only writer. Front-ends turn input into
//! `Intent`s and carry out the returned `Effect`s (alerts, clipboard
//! writes, focus) through the `Clipboard` and `Notifier` services.

pub mod command;
pub mod config;
pub mod controller;
pub mod event;
pub mod keymap;
pub mod model;
pub mod services;
pub mod snapshot;
pub mod view;

pub use command::{Direction, Effect, Intent};
pub use config::Config;
pub use controller::EditorController;
pub use event::{EditorEvent, EventBus, EventHandler};
pub use keymap::{Key, KeyBinding, KeyPress, Keymap, Modifiers};
pub use model::EditorModel;
pub use services::{Clipboard, ClipboardError, Notifier};
pub use snapshot::EditorSnapshot;
pub use view::{EditorView, LineView, NumberRowView};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("A minimum of {min} lines is required!")]
    MinimumLines { min: usize },

    #[error("Buffer error: {0}")]
    Buffer(#[from] linepad_buffer::BufferError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
