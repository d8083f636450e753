use iced::widget::text_input;
use iced::{Event, Size, Subscription, Task, event, keyboard};

use linepad_core::{Config, EditorController, EventHandler, Keymap, Notifier};

use crate::platform::{ArboardClipboard, DialogNotifier};
use crate::style::EditorStyle;

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

/// Id of the text input rendered for the active line.
pub fn active_line_input() -> text_input::Id {
    text_input::Id::new("active-line")
}

pub struct App {
    pub editor: EditorController,
    pub keymap: Keymap,
    pub clipboard: ArboardClipboard,
    pub notifier: Box<dyn Notifier + Send>,
    pub events: EventHandler,
    pub style: EditorStyle,
    pub modifiers: keyboard::Modifiers,
    /// Active line content from before the last shortening edit
    pub content_before_edit: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(mut editor: EditorController, keymap: Keymap, style: EditorStyle) -> (Self, Task<Message>) {
        let effects = editor.take_effects();
        let events = EventHandler::new(editor.subscribe());
        let app = Self {
            editor,
            keymap,
            clipboard: ArboardClipboard,
            notifier: Box::new(DialogNotifier::default()),
            events,
            style,
            modifiers: keyboard::Modifiers::default(),
            content_before_edit: None,
            status_message: "Ready | Ctrl+Enter: Add line | Ctrl+B: Delete line".to_string(),
        };
        let task = app.run_effects(effects);
        (app, task)
    }

    /// Replaces the alert dialog, e.g. with a recording fake.
    pub fn with_notifier(mut self, notifier: impl Notifier + Send + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn title(&self) -> String {
        format!("Linepad - {} lines", self.editor.line_count())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Listen to every key, including ones the text input already handled.
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                Some(Message::KeyPressed(key, modifiers))
            }
            Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                Some(Message::ModifiersChanged(modifiers))
            }
            _ => None,
        })
    }
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let editor = EditorController::from_config(&config)?;
    let keymap = Keymap::from_config(&config);
    let style = EditorStyle::for_font_size(config.ui.font_size);
    let window_size = Size::new(config.ui.window_width, config.ui.window_height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(window_size)
        .theme(|_| iced::Theme::Dark)
        .run_with(move || App::new(editor, keymap, style))
        .map_err(|e| anyhow::anyhow!("Application error: {}", e))
}
