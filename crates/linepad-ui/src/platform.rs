//! System clipboard and message box implementations.

use std::future::Future;

use linepad_core::{Clipboard, ClipboardError, Notifier};

/// System clipboard backed by `arboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArboardClipboard;

impl Clipboard for ArboardClipboard {
    fn write_text(&self, text: String) -> impl Future<Output = Result<(), ClipboardError>> + Send {
        async move {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|err| ClipboardError::Write(err.to_string()))
        }
    }
}

/// Blocking warning dialog via `rfd`.
#[derive(Debug, Clone)]
pub struct DialogNotifier {
    title: String,
}

impl DialogNotifier {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for DialogNotifier {
    fn default() -> Self {
        Self::new("Linepad")
    }
}

impl Notifier for DialogNotifier {
    fn show(&self, message: &str) {
        tracing::debug!("Showing dialog: {}", message);
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(self.title.as_str())
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
