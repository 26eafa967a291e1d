use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] placeholder: &'static str,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        div {
            label { class: theme::LABEL, "{label}" if required { " *" } }
            input {
                class: theme::INPUT,
                r#type: kind,
                value: "{value}",
                placeholder: placeholder,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] placeholder: &'static str,
) -> Element {
    rsx! {
        div {
            label { class: theme::LABEL, "{label}" }
            textarea {
                class: "textarea",
                rows: "3",
                value: "{value}",
                placeholder: placeholder,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn CheckField(#[props(into)] label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "check",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| onchange.call(evt.checked()),
            }
            span { "{label}" }
        }
    }
}
