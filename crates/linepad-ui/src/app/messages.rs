use iced::keyboard;

use linepad_buffer::LineId;
use linepad_core::ClipboardError;

#[derive(Debug, Clone)]
pub enum Message {
    // Toolbar
    AddLine,
    DeleteLine,

    // Lines
    LineClicked(LineId),
    LineEdited(LineId, String),

    // Keyboard
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    ModifiersChanged(keyboard::Modifiers),

    // Async results
    ClipboardWritten(Result<String, ClipboardError>),
}
