//! Editor state: which line is active and the configured line counts.

use linepad_buffer::LineId;

use crate::config::EditorConfig;

/// The editor's only real state.
///
/// Plain data; `EditorController` keeps it consistent with the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorModel {
    active_line: Option<LineId>,
    active_index: Option<usize>,

    /// Value shown on the most recently appended gutter label
    pub number_counter: usize,

    /// Lines seeded at startup
    pub initial_lines: usize,

    /// Deletion floor
    pub min_lines: usize,
}

impl EditorModel {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            active_line: None,
            active_index: None,
            number_counter: 0,
            initial_lines: config.initial_lines,
            min_lines: config.min_lines,
        }
    }

    /// Records the active line and its index. No bounds checking.
    pub fn update_active_line(&mut self, line: LineId, index: usize) {
        self.active_line = Some(line);
        self.active_index = Some(index);
    }

    /// Forgets the active line, for when none is left to activate.
    pub fn clear_active(&mut self) {
        self.active_line = None;
        self.active_index = None;
    }

    pub fn active_line(&self) -> Option<LineId> {
        self.active_line
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }
}

impl Default for EditorModel {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = EditorModel::default();
        assert_eq!(model.initial_lines, 25);
        assert_eq!(model.min_lines, 10);
        assert_eq!(model.active_line(), None);
        assert_eq!(model.active_index(), None);
    }

    #[test]
    fn test_update_is_unchecked() {
        let mut model = EditorModel::default();
        let id = LineId::new();
        model.update_active_line(id, 999);
        assert_eq!(model.active_line(), Some(id));
        assert_eq!(model.active_index(), Some(999));
    }

    #[test]
    fn test_clear_active() {
        let mut model = EditorModel::default();
        model.update_active_line(LineId::new(), 3);
        model.clear_active();
        assert_eq!(model.active_line(), None);
        assert_eq!(model.active_index(), None);
    }
}
