//! Intents going into the controller and effects coming out of it.
//!
//! ## Learning: Commands as Values
//!
//! Front-ends never touch editor state directly. They describe what the
//! user did as an `Intent`; the controller applies it and hands back the
//! `Effect`s the outside world still has to carry out.

use linepad_buffer::LineId;

/// Vertical navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Signed index offset.
    pub fn delta(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Something the user asked the editor to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Insert a line after the active one
    AddLine,
    /// Delete the active line
    DeleteLine,
    /// Move the active line up or down
    Navigate(Direction),
    /// Move down, growing the document when reaching the end
    Enter,
    /// Step up from a blank line
    Backspace,
    /// Copy selected lines to the clipboard
    Copy,
    /// Pointer press on a line
    Click { line: LineId, shift: bool },
    /// Line text changed in the surface
    EditContent { line: LineId, content: String },
}

impl Intent {
    /// Returns the intent's display name.
    pub fn display_name(&self) -> &str {
        match self {
            Intent::AddLine => "Add Line",
            Intent::DeleteLine => "Delete Line",
            Intent::Navigate(Direction::Up) => "Line Up",
            Intent::Navigate(Direction::Down) => "Line Down",
            Intent::Enter => "Enter",
            Intent::Backspace => "Backspace",
            Intent::Copy => "Copy",
            Intent::Click { shift: false, .. } => "Click",
            Intent::Click { shift: true, .. } => "Extend Selection",
            Intent::EditContent { .. } => "Edit",
        }
    }

    /// Parses a command name as used in key binding config.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "editor.add_line" => Some(Intent::AddLine),
            "editor.delete_line" => Some(Intent::DeleteLine),
            "editor.line_up" => Some(Intent::Navigate(Direction::Up)),
            "editor.line_down" => Some(Intent::Navigate(Direction::Down)),
            "editor.enter" => Some(Intent::Enter),
            "editor.backspace" => Some(Intent::Backspace),
            "editor.copy" => Some(Intent::Copy),
            _ => None,
        }
    }
}

/// Work left for the front-end after an intent is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking message to the user
    Notify(String),
    /// Write text to the system clipboard
    CopyToClipboard(String),
    /// Move input focus to a line
    Focus(LineId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), -1);
        assert_eq!(Direction::Down.delta(), 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Intent::parse("editor.delete_line"), Some(Intent::DeleteLine));
        assert_eq!(
            Intent::parse("editor.line_up"),
            Some(Intent::Navigate(Direction::Up))
        );
        assert_eq!(Intent::parse("editor.save"), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Intent::AddLine.display_name(), "Add Line");
        let click = Intent::Click {
            line: LineId::new(),
            shift: true,
        };
        assert_eq!(click.display_name(), "Extend Selection");
    }
}
