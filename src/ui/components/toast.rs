use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Queues a toast; the oldest one is dropped once the queue is full.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let toast = ToastMessage::new(kind, message);
    toasts.with_mut(|queue| {
        if queue.len() >= MAX_TOASTS {
            queue.remove(0);
        }
        queue.push(toast);
    });
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|queue| queue.retain(|toast| toast.id != id));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let queue = toasts();

    if queue.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toasts",
            ul {
                for toast in queue {
                    ToastCard { key: "{toast.id}", toast, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(toast: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = toast.id.clone();
    use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            dismiss(toasts, &id);
        }
    });

    let id = toast.id.clone();
    rsx! {
        li { class: toast.kind.class(),
            span { "{toast.kind.icon()}" }
            p { style: "margin: 0", "{toast.text}" }
            button { onclick: move |_| dismiss(toasts, &id), "Dismiss" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_stylesheet_classes() {
        assert_eq!(ToastKind::Error.class(), "toast toast-error");
        assert_eq!(ToastKind::Success.icon(), "✅");
    }

    #[test]
    fn messages_get_distinct_ids() {
        let first = ToastMessage::new(ToastKind::Info, "one");
        let second = ToastMessage::new(ToastKind::Info, "two");
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("toast-"));
    }
}
