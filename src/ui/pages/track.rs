use dioxus::prelude::*;

use crate::{
    domain::tracking::{lookup_tracking, TrackingStatus},
    ui::{components::field::TextField, theme},
};

#[component]
pub fn TrackPage() -> Element {
    let mut tracking_input = use_signal(String::new);
    let mut status = use_signal(|| None::<TrackingStatus>);

    let on_track = move |evt: FormEvent| {
        evt.prevent_default();
        let id = tracking_input();
        let result = lookup_tracking(&id);
        tracing::debug!(tracking_id = %id, ?result, "tracking lookup");
        status.set(Some(result));
    };

    rsx! {
        div { class: "page",
            form { class: "panel stack", onsubmit: on_track,
                h2 { class: "panel-title", "Track a shipment" }
                p { class: "muted", "Enter the tracking ID from your booking confirmation, e.g. SP12345." }
                TextField {
                    label: "Tracking ID",
                    value: tracking_input(),
                    placeholder: "SP123456",
                    oninput: move |v| tracking_input.set(v),
                }
                div { class: "row",
                    button { class: theme::BTN_PRIMARY, r#type: "submit", "Track" }
                }
                if let Some(result) = status() {
                    div { class: "status-box",
                        span { "{result.icon()} " }
                        span { "{result.message()}" }
                    }
                }
            }
        }
    }
}
