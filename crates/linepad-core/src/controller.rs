//! The editor state machine.
//!
//! `EditorController` owns the model and both views and is the only code
//! that mutates them. Every structural change (add/delete) is followed by
//! a cache refresh, and every index-based lookup goes through that cache.

use linepad_buffer::{BufferError, Line, LineCache, LineId, LineRange, LineStore};
use tokio::sync::broadcast;

use crate::command::{Direction, Effect, Intent};
use crate::config::Config;
use crate::event::{EditorEvent, EventBus};
use crate::model::EditorModel;
use crate::snapshot::EditorSnapshot;
use crate::view::{EditorView, NumberRowView};
use crate::{CoreError, CoreResult};

/// Translates intents into consistent (model, views) updates.
///
/// ## Thread Safety
///
/// Owned by the UI thread. Other components observe it through the
/// event bus or the effects returned from `dispatch`.
pub struct EditorController {
    model: EditorModel,
    editor_view: EditorView,
    number_row: NumberRowView,

    /// Snapshot of line order, refreshed after every add/delete
    cache: LineCache,

    events: EventBus,

    /// Effects produced since the last `take_effects`
    effects: Vec<Effect>,
}

impl EditorController {
    /// Creates a controller over empty views and seeds the initial lines.
    pub fn new(model: EditorModel, editor_view: EditorView, number_row: NumberRowView) -> Self {
        let mut controller = Self {
            model,
            editor_view,
            number_row,
            cache: LineCache::default(),
            events: EventBus::new(),
            effects: Vec::new(),
        };
        controller.initialize();
        controller
    }

    /// Creates a controller from validated configuration.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self::new(
            EditorModel::new(&config.editor),
            EditorView::new(),
            NumberRowView::new(),
        ))
    }

    fn initialize(&mut self) {
        let count = self.model.initial_lines;
        for number in 1..=count {
            self.editor_view.add_line(None);
            self.number_row.add_number(number);
        }
        self.model.number_counter = count;

        self.refresh_cache();
        if let Some(first) = self.cache.get(0) {
            self.set_active_line(first, 0);
        }

        self.events.emit(EditorEvent::Initialized { lines: count });
        tracing::info!("Editor initialized with {} lines", count);
    }

    // ==================== Dispatch ====================

    /// Applies one intent and returns the effects left for the front-end.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        tracing::trace!("Dispatching {}", intent.display_name());

        match intent {
            Intent::AddLine => {
                self.add_line();
            }
            Intent::DeleteLine => match self.delete_line() {
                Ok(()) => {}
                Err(err @ CoreError::MinimumLines { .. }) => {
                    self.effects.push(Effect::Notify(err.to_string()));
                }
                Err(err) => tracing::error!("Delete failed: {}", err),
            },
            Intent::Navigate(direction) => {
                self.navigate(direction);
            }
            Intent::Enter => self.enter(),
            Intent::Backspace => {
                self.backspace();
            }
            Intent::Copy => {
                if let Some(text) = self.copy_selection() {
                    let lines = text.split('\n').count();
                    self.events.emit(EditorEvent::CopyRequested { lines });
                    self.effects.push(Effect::CopyToClipboard(text));
                }
            }
            Intent::Click { line, shift } => self.click(line, shift),
            Intent::EditContent { line, content } => self.edit_content(line, content),
        }

        self.take_effects()
    }

    /// Drains effects produced by direct method calls.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // ==================== Structure ====================

    fn refresh_cache(&mut self) {
        self.cache = LineCache::snapshot(self.editor_view.all_lines());
    }

    fn line_at(&self, index: usize) -> Option<LineId> {
        debug_assert!(
            self.cache.ensure_fresh(self.editor_view.all_lines()).is_ok(),
            "line cache used before refresh"
        );
        self.cache.get(index)
    }

    /// Inserts an empty line after the active one and activates it.
    pub fn add_line(&mut self) -> LineId {
        let line = self.editor_view.add_line(self.model.active_line());
        self.model.number_counter += 1;
        self.number_row.add_number(self.model.number_counter);
        self.refresh_cache();

        if let Some(index) = self.cache.index_of(line) {
            tracing::debug!("Added line at {}", index);
            self.events.emit(EditorEvent::LineAdded { line, index });
            self.set_active_line(line, index);
        }
        line
    }

    /// Deletes the active line, refusing at the configured floor.
    pub fn delete_line(&mut self) -> CoreResult<()> {
        let active_index = match self.model.active_index() {
            Some(index) if self.model.active_line().is_some() => index,
            _ => return Err(self.refuse_delete()),
        };
        if self.cache.len() <= self.model.min_lines {
            return Err(self.refuse_delete());
        }

        let removed = self
            .line_at(active_index)
            .ok_or(BufferError::IndexOutOfBounds {
                index: active_index,
                len: self.cache.len(),
            })?;
        self.editor_view.remove_line(removed)?;
        self.number_row.remove_last_number();
        self.refresh_cache();

        tracing::debug!("Removed line at {}", active_index);
        self.events.emit(EditorEvent::LineRemoved {
            line: removed,
            index: active_index,
        });

        let next_index = active_index.saturating_sub(1);
        match self.line_at(next_index) {
            Some(next) => self.set_active_line(next, next_index),
            None => {
                tracing::debug!("Deleted the last remaining line");
                self.model.clear_active();
            }
        }
        self.model.number_counter = self.model.number_counter.saturating_sub(1);
        Ok(())
    }

    fn refuse_delete(&self) -> CoreError {
        let min = self.model.min_lines;
        tracing::warn!("Refusing delete: {} lines, minimum {}", self.cache.len(), min);
        self.events.emit(EditorEvent::MinimumLinesViolation { min });
        CoreError::MinimumLines { min }
    }

    // ==================== Active Line ====================

    /// Moves the active flag to `line` and records it in the model.
    pub fn set_active_line(&mut self, line: LineId, index: usize) {
        if !self.editor_view.all_lines().contains(line) {
            tracing::debug!("Ignoring activation of unknown line {}", line);
            return;
        }

        if let Some(previous) = self.model.active_line() {
            if let Some(mut view) = self.editor_view.line_view(previous) {
                view.remove_active();
            }
        }
        if let Some(mut view) = self.editor_view.line_view(line) {
            view.set_active();
        }
        self.model.update_active_line(line, index);

        // Only the latest focus request matters.
        self.effects.retain(|effect| !matches!(effect, Effect::Focus(_)));
        self.effects.push(Effect::Focus(line));
        self.events
            .emit(EditorEvent::ActiveLineChanged { line, index });
    }

    /// Activates the neighbouring line. Returns false at either boundary.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let target = self
            .model
            .active_index()
            .and_then(|index| index.checked_add_signed(direction.delta()));

        match target.and_then(|index| self.line_at(index).map(|line| (line, index))) {
            Some((line, index)) => {
                self.set_active_line(line, index);
                true
            }
            None => false,
        }
    }

    fn is_active_last(&self) -> bool {
        self.model.active_index().is_some() && self.model.active_index() == self.cache.last_index()
    }

    /// Steps back onto the current line after growing the document by one.
    fn grow_from_last(&mut self) {
        if self.is_active_last() {
            self.add_line();
            self.navigate(Direction::Up);
        }
    }

    /// Moves down; reaching the last line appends a fresh one below it.
    pub fn enter(&mut self) {
        self.navigate(Direction::Down);
        self.grow_from_last();
    }

    /// Steps up from a blank line.
    ///
    /// Returns false when the line has text, leaving the key to the
    /// surface's own character deletion.
    pub fn backspace(&mut self) -> bool {
        let blank = self.active_line().is_some_and(Line::is_blank);
        if blank {
            self.navigate(Direction::Up);
        }
        blank
    }

    /// Pointer press on a line.
    pub fn click(&mut self, line: LineId, shift: bool) {
        let Some(index) = self.cache.index_of(line) else {
            tracing::debug!("Ignoring click outside known lines");
            return;
        };

        if shift {
            if let Some(active_index) = self.model.active_index() {
                self.select_range(LineRange::new(active_index, index));
                return;
            }
        }

        self.clear_selection();
        if self.model.active_line() == Some(line) {
            return;
        }
        self.set_active_line(line, index);
        self.grow_from_last();
    }

    // ==================== Selection & Content ====================

    /// Marks every line in `range` as selected. Existing selection is kept.
    pub fn select_range(&mut self, range: LineRange) {
        for index in range.indices() {
            let Some(id) = self.line_at(index) else {
                break;
            };
            if let Some(mut view) = self.editor_view.line_view(id) {
                view.set_selected(true);
            }
        }
        self.events.emit(EditorEvent::SelectionChanged {
            selected: self.selected_count(),
        });
    }

    /// Clears every selected flag.
    pub fn clear_selection(&mut self) {
        let selected: Vec<LineId> = self
            .editor_view
            .all_lines()
            .iter()
            .filter(|line| line.is_selected())
            .map(Line::id)
            .collect();
        if selected.is_empty() {
            return;
        }

        for id in selected {
            if let Some(mut view) = self.editor_view.line_view(id) {
                view.set_selected(false);
            }
        }
        self.events
            .emit(EditorEvent::SelectionChanged { selected: 0 });
    }

    /// Newline-joined text of the selected, non-empty lines.
    pub fn copy_selection(&self) -> Option<String> {
        let selected: Vec<&str> = self
            .editor_view
            .all_lines()
            .iter()
            .filter(|line| line.is_selected() && !line.content().is_empty())
            .map(Line::content)
            .collect();

        (!selected.is_empty()).then(|| selected.join("\n"))
    }

    /// Stores text typed into a line by the surface.
    pub fn edit_content(&mut self, line: LineId, content: String) {
        match self.editor_view.line_view(line) {
            Some(mut view) => view.update_content(content),
            None => tracing::debug!("Ignoring edit of unknown line {}", line),
        }
    }

    // ==================== Accessors ====================

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn lines(&self) -> &LineStore {
        self.editor_view.all_lines()
    }

    pub fn number_row(&self) -> &NumberRowView {
        &self.number_row
    }

    pub fn cache(&self) -> &LineCache {
        &self.cache
    }

    pub fn active_index(&self) -> Option<usize> {
        self.model.active_index()
    }

    pub fn active_line(&self) -> Option<&Line> {
        self.model
            .active_line()
            .and_then(|id| self.editor_view.line(id))
    }

    pub fn line_count(&self) -> usize {
        self.cache.len()
    }

    pub fn selected_count(&self) -> usize {
        self.lines().iter().filter(|line| line.is_selected()).count()
    }

    /// Serializable copy of the current state.
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot::capture(self)
    }

    /// Subscribes to editor events.
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use proptest::prelude::*;

    fn controller(initial_lines: usize, min_lines: usize) -> EditorController {
        let config = EditorConfig {
            initial_lines,
            min_lines,
        };
        let mut editor = EditorController::new(
            EditorModel::new(&config),
            EditorView::new(),
            NumberRowView::new(),
        );
        editor.take_effects();
        editor
    }

    fn line_id(editor: &EditorController, index: usize) -> LineId {
        editor.cache().get(index).unwrap()
    }

    fn active_count(editor: &EditorController) -> usize {
        editor.lines().iter().filter(|line| line.is_active()).count()
    }

    fn assert_consistent(editor: &EditorController) {
        let len = editor.lines().len();
        let expected: Vec<usize> = (1..=len).collect();
        assert_eq!(editor.number_row().labels(), expected.as_slice());
        assert_eq!(editor.cache().len(), len);
        assert!(editor.cache().ensure_fresh(editor.lines()).is_ok());
        if len == 0 {
            assert_eq!(editor.active_index(), None);
            assert!(editor.active_line().is_none());
        } else {
            assert_eq!(active_count(editor), 1);
            let index = editor.active_index().unwrap();
            assert!(index < len);
            assert!(editor.lines().at(index).unwrap().is_active());
        }
    }

    fn click(editor: &mut EditorController, index: usize, shift: bool) -> Vec<Effect> {
        let line = line_id(editor, index);
        editor.dispatch(Intent::Click { line, shift })
    }

    fn go_to(editor: &mut EditorController, index: usize) {
        while editor.active_index().unwrap() < index {
            editor.navigate(Direction::Down);
        }
        while editor.active_index().unwrap() > index {
            editor.navigate(Direction::Up);
        }
        editor.take_effects();
    }

    #[test]
    fn test_initial_state() {
        let editor = controller(25, 10);
        assert_eq!(editor.line_count(), 25);
        assert_eq!(editor.active_index(), Some(0));
        assert_eq!(editor.model().number_counter, 25);
        assert_consistent(&editor);
    }

    #[test]
    fn test_empty_editor_has_no_active_line() {
        let mut editor = controller(0, 0);
        assert_eq!(editor.active_index(), None);
        assert!(!editor.navigate(Direction::Down));

        editor.dispatch(Intent::AddLine);
        assert_eq!(editor.line_count(), 1);
        assert_consistent(&editor);
    }

    #[test]
    fn test_add_lines_keeps_gutter_in_step() {
        for n in [10, 15, 40] {
            let mut editor = controller(25, 10);
            for _ in 0..n {
                editor.dispatch(Intent::AddLine);
            }
            assert_eq!(editor.line_count(), 25 + n);
            assert_eq!(editor.number_row().len(), editor.line_count());
            assert_consistent(&editor);
        }
    }

    #[test]
    fn test_add_line_inserts_after_active() {
        let mut editor = controller(25, 10);
        go_to(&mut editor, 3);
        let before = line_id(&editor, 4);

        let added = editor.add_line();
        assert_eq!(editor.active_index(), Some(4));
        assert_eq!(line_id(&editor, 4), added);
        assert_eq!(line_id(&editor, 5), before);
    }

    #[test]
    fn test_delete_at_floor_warns_once() {
        let mut editor = controller(10, 10);
        go_to(&mut editor, 5);
        let mut events = editor.subscribe();

        let effects = editor.dispatch(Intent::DeleteLine);

        assert_eq!(
            effects,
            vec![Effect::Notify("A minimum of 10 lines is required!".to_string())]
        );
        assert_eq!(editor.line_count(), 10);
        assert_eq!(editor.active_index(), Some(5));
        assert_eq!(
            events.try_recv().unwrap(),
            EditorEvent::MinimumLinesViolation { min: 10 }
        );
        assert!(events.try_recv().is_err());
        assert_consistent(&editor);
    }

    #[test]
    fn test_delete_activates_previous_line() {
        let mut editor = controller(25, 10);
        go_to(&mut editor, 5);
        let removed = line_id(&editor, 5);
        let previous = line_id(&editor, 4);

        editor.delete_line().unwrap();

        assert_eq!(editor.line_count(), 24);
        assert!(!editor.lines().contains(removed));
        assert_eq!(editor.active_index(), Some(4));
        assert_eq!(editor.model().active_line(), Some(previous));
        assert_eq!(editor.model().number_counter, 24);
        assert_consistent(&editor);
    }

    #[test]
    fn test_delete_first_line_activates_new_first() {
        let mut editor = controller(25, 10);
        let second = line_id(&editor, 1);

        editor.delete_line().unwrap();

        assert_eq!(editor.active_index(), Some(0));
        assert_eq!(editor.model().active_line(), Some(second));
        assert_consistent(&editor);
    }

    #[test]
    fn test_delete_down_to_floor() {
        let mut editor = controller(12, 10);
        assert!(editor.delete_line().is_ok());
        assert!(editor.delete_line().is_ok());
        assert!(matches!(
            editor.delete_line(),
            Err(CoreError::MinimumLines { min: 10 })
        ));
        assert_eq!(editor.line_count(), 10);
    }

    #[test]
    fn test_delete_only_line_without_floor() {
        let mut editor = controller(1, 0);
        let only = line_id(&editor, 0);

        let effects = editor.dispatch(Intent::DeleteLine);

        assert!(effects.is_empty());
        assert_eq!(editor.line_count(), 0);
        assert!(!editor.lines().contains(only));
        assert_eq!(editor.model().active_line(), None);
        assert_eq!(editor.snapshot().active_index, None);
        assert_consistent(&editor);

        // Nothing left to delete, and adding starts over at the top.
        assert!(matches!(
            editor.delete_line(),
            Err(CoreError::MinimumLines { min: 0 })
        ));
        editor.dispatch(Intent::AddLine);
        assert_eq!(editor.active_index(), Some(0));
        assert_consistent(&editor);
    }

    #[test]
    fn test_navigate_clamps_at_boundaries() {
        let mut editor = controller(25, 10);
        assert!(!editor.navigate(Direction::Up));
        assert_eq!(editor.active_index(), Some(0));

        go_to(&mut editor, 24);
        assert!(!editor.navigate(Direction::Down));
        assert_eq!(editor.active_index(), Some(24));
        assert_eq!(editor.line_count(), 25);
    }

    #[test]
    fn test_enter_grows_document_at_end() {
        let mut editor = controller(25, 10);
        for _ in 0..24 {
            editor.dispatch(Intent::Enter);
        }
        assert_eq!(editor.line_count(), 26);
        assert_eq!(editor.active_index(), Some(24));
        assert_consistent(&editor);
    }

    #[test]
    fn test_enter_on_last_line() {
        let mut editor = controller(25, 10);
        go_to(&mut editor, 24);

        editor.dispatch(Intent::Enter);
        assert_eq!(editor.line_count(), 26);
        assert_eq!(editor.active_index(), Some(24));
    }

    #[test]
    fn test_backspace() {
        let mut editor = controller(25, 10);
        go_to(&mut editor, 3);

        assert!(editor.backspace());
        assert_eq!(editor.active_index(), Some(2));

        let line = line_id(&editor, 2);
        editor.edit_content(line, "text".to_string());
        assert!(!editor.backspace());
        assert_eq!(editor.active_index(), Some(2));
        assert_eq!(editor.active_line().unwrap().content(), "text");
    }

    #[test]
    fn test_click_activates_and_clears_selection() {
        let mut editor = controller(25, 10);
        click(&mut editor, 2, true);
        assert_eq!(editor.selected_count(), 3);

        click(&mut editor, 6, false);
        assert_eq!(editor.selected_count(), 0);
        assert_eq!(editor.active_index(), Some(6));
        assert_consistent(&editor);
    }

    #[test]
    fn test_click_last_line_grows() {
        let mut editor = controller(25, 10);
        click(&mut editor, 24, false);
        assert_eq!(editor.line_count(), 26);
        assert_eq!(editor.active_index(), Some(24));
        assert_consistent(&editor);
    }

    #[test]
    fn test_click_unknown_line_ignored() {
        let mut editor = controller(25, 10);
        let effects = editor.dispatch(Intent::Click {
            line: LineId::new(),
            shift: false,
        });
        assert!(effects.is_empty());
        assert_eq!(editor.active_index(), Some(0));
    }

    #[test]
    fn test_shift_click_selects_in_either_order() {
        let mut editor = controller(25, 10);
        go_to(&mut editor, 7);
        click(&mut editor, 3, true);

        assert_eq!(editor.active_index(), Some(7));
        let selected: Vec<usize> = editor
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_selected())
            .map(|(index, _)| index)
            .collect();
        assert_eq!(selected, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_copy_selected_lines() {
        let mut editor = controller(25, 10);
        for index in 3..=7 {
            let line = line_id(&editor, index);
            editor.dispatch(Intent::EditContent {
                line,
                content: "x".to_string(),
            });
        }
        click(&mut editor, 3, false);
        click(&mut editor, 7, true);

        let effects = editor.dispatch(Intent::Copy);
        assert_eq!(
            effects,
            vec![Effect::CopyToClipboard("x\nx\nx\nx\nx".to_string())]
        );
    }

    #[test]
    fn test_copy_skips_empty_lines() {
        let mut editor = controller(25, 10);
        assert!(editor.dispatch(Intent::Copy).is_empty());

        let line = line_id(&editor, 1);
        editor.edit_content(line, "only".to_string());
        click(&mut editor, 2, true);

        assert_eq!(editor.copy_selection(), Some("only".to_string()));
    }

    #[test]
    fn test_single_focus_effect_per_dispatch() {
        let mut editor = controller(25, 10);
        editor.take_effects();

        let effects = editor.dispatch(Intent::Navigate(Direction::Down));
        assert_eq!(effects, vec![Effect::Focus(line_id(&editor, 1))]);

        go_to(&mut editor, 23);
        editor.take_effects();
        let effects = editor.dispatch(Intent::Enter);
        assert_eq!(effects, vec![Effect::Focus(line_id(&editor, 24))]);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = Config::default();
        config.editor.min_lines = 30;
        assert!(matches!(
            EditorController::from_config(&config),
            Err(CoreError::Config(_))
        ));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add,
        Delete,
        Up,
        Down,
        Enter,
        Backspace,
        Click(prop::sample::Index, bool),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Add),
            Just(Op::Delete),
            Just(Op::Up),
            Just(Op::Down),
            Just(Op::Enter),
            Just(Op::Backspace),
            (any::<prop::sample::Index>(), any::<bool>()).prop_map(|(i, s)| Op::Click(i, s)),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..80)) {
            let mut editor = controller(12, 10);
            for op in ops {
                let intent = match op {
                    Op::Add => Intent::AddLine,
                    Op::Delete => Intent::DeleteLine,
                    Op::Up => Intent::Navigate(Direction::Up),
                    Op::Down => Intent::Navigate(Direction::Down),
                    Op::Enter => Intent::Enter,
                    Op::Backspace => Intent::Backspace,
                    Op::Click(index, shift) => Intent::Click {
                        line: line_id(&editor, index.index(editor.line_count())),
                        shift,
                    },
                };
                editor.dispatch(intent);

                prop_assert!(editor.line_count() >= 10);
                prop_assert_eq!(active_count(&editor), 1);
                prop_assert_eq!(editor.number_row().len(), editor.line_count());
                let index = editor.active_index().unwrap();
                prop_assert!(index < editor.line_count());
                prop_assert!(editor.lines().at(index).unwrap().is_active());
            }
        }
    }
}
