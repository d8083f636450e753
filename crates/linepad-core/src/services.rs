//! Collaborators the editor talks to but does not own.
//!
//! Front-ends inject implementations; tests use in-memory fakes.

use std::future::Future;

use crate::command::Effect;

/// Errors from the clipboard service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to copy: {0}")]
    Write(String),
}

/// Asynchronous system clipboard.
pub trait Clipboard: Clone + Send + Sync + 'static {
    fn write_text(&self, text: String) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// Blocking user-facing message box.
pub trait Notifier {
    fn show(&self, message: &str);
}

/// Shows every `Effect::Notify` and hands back the remaining effects.
pub fn show_notifications<N: Notifier + ?Sized>(
    notifier: &N,
    effects: Vec<Effect>,
) -> Vec<Effect> {
    effects
        .into_iter()
        .filter(|effect| match effect {
            Effect::Notify(message) => {
                notifier.show(message);
                false
            }
            _ => true,
        })
        .collect()
}

/// Writes `text` to the clipboard and logs the outcome.
///
/// Returns the copied text on success. Failures are logged only; callers
/// are not expected to retry.
pub async fn copy_to_clipboard<C: Clipboard>(
    clipboard: C,
    text: String,
) -> Result<String, ClipboardError> {
    match clipboard.write_text(text.clone()).await {
        Ok(()) => {
            tracing::info!("Copied to clipboard: {:?}", text);
            Ok(text)
        }
        Err(err) => {
            tracing::error!("Failed to copy: {}", err);
            Err(err)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{MemoryClipboard, RecordingNotifier};
    use super::*;

    #[test]
    fn test_show_notifications_keeps_other_effects() {
        let notifier = RecordingNotifier::default();
        let effects = vec![
            Effect::Notify("A minimum of 10 lines is required!".to_string()),
            Effect::CopyToClipboard("x".to_string()),
        ];

        let rest = show_notifications(&notifier, effects);
        assert_eq!(rest, vec![Effect::CopyToClipboard("x".to_string())]);
        assert_eq!(
            *notifier.messages.borrow(),
            vec!["A minimum of 10 lines is required!".to_string()]
        );
    }

    #[tokio::test]
    async fn test_copy_success() {
        let clipboard = MemoryClipboard::default();
        let result = copy_to_clipboard(clipboard.clone(), "a\nb".to_string()).await;

        assert_eq!(result, Ok("a\nb".to_string()));
        assert_eq!(*clipboard.contents.lock().unwrap(), vec!["a\nb".to_string()]);
    }

    #[tokio::test]
    async fn test_copy_failure_is_reported() {
        let clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let result = copy_to_clipboard(clipboard.clone(), "x".to_string()).await;

        assert!(matches!(result, Err(ClipboardError::Write(_))));
        assert!(clipboard.contents.lock().unwrap().is_empty());
    }
}
