//! A single editable line.
//!
//! ## Learning: Newtypes
//!
//! `LineId` wraps a `Uuid` so a line id can never be confused with a
//! line index. Indices shift on every insert/delete; ids do not.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(Uuid);

impl LineId {
    /// Creates a new unique line ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of text plus its display flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    id: LineId,
    content: String,
    active: bool,
    selected: bool,
}

impl Line {
    /// Creates an empty, inactive, unselected line.
    pub fn new() -> Self {
        Self {
            id: LineId::new(),
            content: String::new(),
            active: false,
            selected: false,
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Returns true if the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}
