//! Views over the line container and the gutter.
//!
//! These hold the structural state the UI renders from. They do no
//! bookkeeping of their own: keeping lines, labels and the active flag in
//! step is `EditorController`'s job.

use linepad_buffer::{BufferResult, Line, LineId, LineStore};

/// Owns the editable line container.
#[derive(Debug, Clone, Default)]
pub struct EditorView {
    lines: LineStore,
}

impl EditorView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty line after `after`, or at the end.
    pub fn add_line(&mut self, after: Option<LineId>) -> LineId {
        self.lines.insert_after(after)
    }

    /// Detaches a line from the container.
    pub fn remove_line(&mut self, line: LineId) -> BufferResult<Line> {
        self.lines.remove(line)
    }

    /// All attached lines in document order.
    pub fn all_lines(&self) -> &LineStore {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Styling/content handle for one line.
    pub fn line_view(&mut self, id: LineId) -> Option<LineView<'_>> {
        self.lines.get_mut(id).map(LineView::new)
    }
}

/// Gutter of line-number labels.
///
/// Labels are only ever appended or popped from the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberRowView {
    labels: Vec<usize>,
}

impl NumberRowView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_number(&mut self, number: usize) {
        self.labels.push(number);
    }

    /// Removes the last label, if any.
    pub fn remove_last_number(&mut self) {
        self.labels.pop();
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Mutable handle over a single line's styling and content.
pub struct LineView<'a> {
    line: &'a mut Line,
}

impl<'a> LineView<'a> {
    pub fn new(line: &'a mut Line) -> Self {
        Self { line }
    }

    pub fn set_active(&mut self) {
        self.line.set_active(true);
    }

    pub fn remove_active(&mut self) {
        self.line.set_active(false);
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.line.set_selected(selected);
    }

    pub fn update_content(&mut self, content: impl Into<String>) {
        self.line.set_content(content);
    }

    pub fn content(&self) -> &str {
        self.line.content()
    }
}
