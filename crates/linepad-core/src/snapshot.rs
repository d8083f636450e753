//! Serializable view of the editor state.

use serde::{Deserialize, Serialize};

use crate::CoreResult;
use crate::controller::EditorController;

/// One line as seen in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub content: String,
    pub active: bool,
    pub selected: bool,
}

/// Lines, gutter labels and active index at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub lines: Vec<LineSnapshot>,
    pub gutter: Vec<usize>,
    pub active_index: Option<usize>,
    pub min_lines: usize,
}

impl EditorSnapshot {
    pub fn capture(editor: &EditorController) -> Self {
        Self {
            lines: editor
                .lines()
                .iter()
                .map(|line| LineSnapshot {
                    content: line.content().to_string(),
                    active: line.is_active(),
                    selected: line.is_selected(),
                })
                .collect(),
            gutter: editor.number_row().labels().to_vec(),
            active_index: editor.active_index(),
            min_lines: editor.model().min_lines,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
