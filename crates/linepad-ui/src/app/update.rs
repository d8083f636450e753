use iced::widget::text_input;
use iced::{Task, keyboard};

use linepad_buffer::Line;
use linepad_core::services::{copy_to_clipboard, show_notifications};
use linepad_core::{EditorEvent, Effect, Intent, Key, KeyPress, Modifiers};

use super::{App, Message, active_line_input};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddLine => self.dispatch(Intent::AddLine),

            Message::DeleteLine => self.dispatch(Intent::DeleteLine),

            Message::LineClicked(line) => {
                let shift = self.modifiers.shift();
                self.dispatch(Intent::Click { line, shift })
            }

            Message::LineEdited(line, content) => {
                // Text input edits reach us before the key event that caused
                // them, so remember what a deleting edit started from.
                if let Some(current) = self.editor.lines().get(line) {
                    if content.len() < current.content().len() {
                        self.content_before_edit = Some(current.content().to_string());
                    }
                }
                self.dispatch(Intent::EditContent { line, content })
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_pressed(key, modifiers),

            Message::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                Task::none()
            }

            Message::ClipboardWritten(result) => {
                self.status_message = match result {
                    Ok(text) => format!("Copied {} lines", text.split('\n').count()),
                    Err(err) => err.to_string(),
                };
                Task::none()
            }
        }
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        let content_before_edit = self.content_before_edit.take();

        let Some(intent) = to_key_press(&key, modifiers).and_then(|press| self.keymap.lookup(&press))
        else {
            return Task::none();
        };

        if intent == Intent::Backspace {
            let blank = match &content_before_edit {
                Some(content) => content.trim().is_empty(),
                None => self.editor.active_line().is_some_and(Line::is_blank),
            };
            if !blank {
                // The text input already deleted a character.
                return Task::none();
            }

            // Stepping up from a blank line leaves it as it was.
            if let (Some(content), Some(line)) = (content_before_edit, self.editor.model().active_line()) {
                self.editor.edit_content(line, content);
            }
        }

        self.dispatch(intent)
    }

    fn dispatch(&mut self, intent: Intent) -> Task<Message> {
        let effects = self.editor.dispatch(intent);
        self.drain_events();
        self.run_effects(effects)
    }

    /// Updates the status line from what the editor reported.
    fn drain_events(&mut self) {
        for event in self.events.drain() {
            if let Some(message) = describe_event(&event) {
                self.status_message = message;
            }
        }
    }

    /// Shows alerts now and turns the rest into tasks.
    pub(crate) fn run_effects(&self, effects: Vec<Effect>) -> Task<Message> {
        let effects = show_notifications(&*self.notifier, effects);

        Task::batch(effects.into_iter().map(|effect| match effect {
            Effect::CopyToClipboard(text) => Task::perform(
                copy_to_clipboard(self.clipboard, text),
                Message::ClipboardWritten,
            ),
            Effect::Focus(_) => text_input::focus(active_line_input()),
            Effect::Notify(_) => Task::none(),
        }))
    }

    pub(crate) fn position_status(&self) -> String {
        let position = self
            .editor
            .active_index()
            .map(|index| format!("Line {}/{}", index + 1, self.editor.line_count()))
            .unwrap_or_else(|| format!("{} lines", self.editor.line_count()));

        match self.editor.selected_count() {
            0 => position,
            selected => format!("{} | {} selected", position, selected),
        }
    }
}

/// Status text for an editor event. Position changes are shown separately.
fn describe_event(event: &EditorEvent) -> Option<String> {
    match event {
        EditorEvent::Initialized { lines } => Some(format!("Started with {} lines", lines)),
        EditorEvent::LineAdded { index, .. } => Some(format!("Added line {}", index + 1)),
        EditorEvent::LineRemoved { index, .. } => Some(format!("Deleted line {}", index + 1)),
        EditorEvent::SelectionChanged { selected: 0 } => Some("Selection cleared".to_string()),
        EditorEvent::SelectionChanged { selected } => Some(format!("{} lines selected", selected)),
        EditorEvent::MinimumLinesViolation { min } => {
            Some(format!("A minimum of {} lines is required!", min))
        }
        EditorEvent::CopyRequested { lines } => Some(format!("Copying {} lines", lines)),
        EditorEvent::ActiveLineChanged { .. } => None,
    }
}

/// Converts an iced key event into a keymap key press.
pub fn to_key_press(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<KeyPress> {
    use keyboard::key::Named;

    let key = match key {
        keyboard::Key::Named(Named::ArrowUp) => Key::Up,
        keyboard::Key::Named(Named::ArrowDown) => Key::Down,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Backspace) => Key::Backspace,
        keyboard::Key::Character(c) => Key::Char(c.to_lowercase().chars().next()?),
        _ => return None,
    };

    let modifiers = Modifiers {
        ctrl: modifiers.control(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        meta: modifiers.logo(),
    };

    Some(KeyPress::new(key, modifiers))
}
