//! Event system for editor notifications.
//!
//! ## Learning: Observer Pattern in Rust
//!
//! Instead of views holding references to each other, the controller
//! broadcasts plain `EditorEvent` values over a `tokio::sync::broadcast`
//! channel. Anyone interested subscribes and gets a copy.

use linepad_buffer::LineId;
use tokio::sync::broadcast;

/// Events that can occur in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Initial lines were seeded
    Initialized { lines: usize },
    /// A line was inserted at `index`
    LineAdded { line: LineId, index: usize },
    /// A line was removed from `index`
    LineRemoved { line: LineId, index: usize },
    /// The active line changed
    ActiveLineChanged { line: LineId, index: usize },
    /// The set of selected lines changed
    SelectionChanged { selected: usize },
    /// A delete was refused at the line floor
    MinimumLinesViolation { min: usize },
    /// Selected text was handed to the clipboard
    CopyRequested { lines: usize },
}

/// Event bus for broadcasting editor events.
pub struct EventBus {
    sender: broadcast::Sender<EditorEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        // Capacity of 256 events in the buffer
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: EditorEvent) {
        // Ignore error if no receivers
        let _ = self.sender.send(event);
    }

    /// Subscribes to events.
    ///
    /// Returns a receiver that will get all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Drains events without blocking.
///
/// Front-ends that run their own loop poll this after each dispatch
/// instead of awaiting the channel.
pub struct EventHandler {
    receiver: broadcast::Receiver<EditorEvent>,
}

impl EventHandler {
    /// Creates a new event handler.
    pub fn new(receiver: broadcast::Receiver<EditorEvent>) -> Self {
        Self { receiver }
    }

    /// Returns the next pending event, if any.
    pub fn try_next(&mut self) -> Option<EditorEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    tracing::warn!("Event handler lagged, missed {} events", n);
                    continue;
                }
                Err(_) => return None,
            }
        }
    }

    /// Returns every pending event in order.
    pub fn drain(&mut self) -> Vec<EditorEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}
