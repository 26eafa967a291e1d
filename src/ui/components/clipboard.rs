use dioxus::prelude::*;

use super::toast::{push_toast, ToastKind, ToastMessage};

/// Script that resolves once the webview clipboard has accepted `text`.
fn clipboard_script(text: &str) -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string(text)?;
    Ok(format!(
        "await navigator.clipboard.writeText({literal});\nreturn true;"
    ))
}

/// Copies `text` through the webview clipboard API. The confirmation toast is
/// only shown after the clipboard write has resolved.
pub fn copy_to_clipboard(toasts: Signal<Vec<ToastMessage>>, text: &str, confirmation: &str) {
    let script = match clipboard_script(text) {
        Ok(script) => script,
        Err(err) => {
            push_toast(toasts, ToastKind::Error, format!("Copy failed: {err}"));
            return;
        }
    };
    let chars = text.len();
    let confirmation = confirmation.to_string();
    spawn(async move {
        match document::eval(&script).await {
            Ok(_) => {
                tracing::debug!(chars, "copied to clipboard");
                push_toast(toasts, ToastKind::Info, confirmation);
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                push_toast(toasts, ToastKind::Error, format!("Copy failed: {err}"));
            }
        }
    });
}
