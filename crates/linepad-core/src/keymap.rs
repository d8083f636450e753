//! Keyboard mapping.
//!
//! Front-ends translate their native key events into a `KeyPress`; the
//! keymap resolves it to the `Intent` bound to it, if any. Matching is
//! exact on modifiers, so `Enter` and `Ctrl+Enter` are different keys.

use crate::command::{Direction, Intent};
use crate::config::Config;
use std::collections::HashMap;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool, // Cmd on macOS, Win on Windows
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Shift modifier.
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }

    /// Parses modifiers from a string like "ctrl+shift".
    pub fn parse(s: &str) -> Self {
        let mut mods = Modifiers::NONE;
        let lower = s.to_lowercase();
        if lower.contains("ctrl") || lower.contains("control") {
            mods.ctrl = true;
        }
        if lower.contains("alt") || lower.contains("option") {
            mods.alt = true;
        }
        if lower.contains("shift") {
            mods.shift = true;
        }
        if lower.contains("meta") || lower.contains("cmd") || lower.contains("win") {
            mods.meta = true;
        }
        mods
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            #[cfg(target_os = "macos")]
            parts.push("Cmd");
            #[cfg(not(target_os = "macos"))]
            parts.push("Win");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Up,
    Down,
}

impl Key {
    /// Parses a key from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "enter" | "return" => Some(Key::Enter),
            "backspace" | "bs" => Some(Key::Backspace),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::Enter => write!(f, "Enter"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
        }
    }
}

/// A key press event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a new key press.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Parses a key binding string like "ctrl+enter".
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('+').collect();
        let key_str = parts.last()?;
        let key = Key::parse(key_str.trim())?;

        let mod_str = parts[..parts.len() - 1].join("+");
        let modifiers = Modifiers::parse(&mod_str);

        Some(Self { key, modifiers })
    }
}

impl std::fmt::Display for KeyPress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// A key binding maps a key press to an intent.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyPress,
    pub intent: Intent,
}

impl KeyBinding {
    pub fn new(key: KeyPress, intent: Intent) -> Self {
        Self { key, intent }
    }
}

/// Keyboard mapping configuration.
pub struct Keymap {
    bindings: HashMap<KeyPress, Intent>,
}

impl Keymap {
    /// Creates a keymap with the default bindings.
    pub fn new() -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
        };
        for binding in Self::default_bindings() {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Creates a keymap from configuration.
    ///
    /// User bindings override defaults bound to the same key.
    pub fn from_config(config: &Config) -> Self {
        let mut keymap = Self::new();

        for (key_str, cmd_str) in &config.keyboard.bindings {
            match (KeyPress::parse(key_str), Intent::parse(cmd_str)) {
                (Some(key), Some(intent)) => keymap.add_binding(KeyBinding::new(key, intent)),
                _ => tracing::warn!("Ignoring key binding {} = {}", key_str, cmd_str),
            }
        }

        keymap
    }

    fn default_bindings() -> Vec<KeyBinding> {
        vec![
            KeyBinding::new(
                KeyPress::new(Key::Up, Modifiers::NONE),
                Intent::Navigate(Direction::Up),
            ),
            KeyBinding::new(
                KeyPress::new(Key::Down, Modifiers::NONE),
                Intent::Navigate(Direction::Down),
            ),
            KeyBinding::new(KeyPress::new(Key::Enter, Modifiers::NONE), Intent::Enter),
            KeyBinding::new(KeyPress::new(Key::Enter, Modifiers::CTRL), Intent::AddLine),
            KeyBinding::new(
                KeyPress::new(Key::Backspace, Modifiers::NONE),
                Intent::Backspace,
            ),
            KeyBinding::new(KeyPress::new(Key::Char('c'), Modifiers::CTRL), Intent::Copy),
            KeyBinding::new(
                KeyPress::new(Key::Char('b'), Modifiers::CTRL),
                Intent::DeleteLine,
            ),
        ]
    }

    /// Returns the intent bound to a key press.
    pub fn lookup(&self, key: &KeyPress) -> Option<Intent> {
        self.bindings.get(key).cloned()
    }

    /// Adds or replaces a binding.
    pub fn add_binding(&mut self, binding: KeyBinding) {
        self.bindings.insert(binding.key, binding.intent);
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
