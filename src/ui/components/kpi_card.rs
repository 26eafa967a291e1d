use dioxus::prelude::*;

#[component]
pub fn KpiCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    description: Option<String>,
    tone: Option<&'static str>,
) -> Element {
    let value_class = tone.unwrap_or("");
    rsx! {
        div {
            class: "panel kpi",
            span { class: "kpi-title", "{title}" }
            span { class: "kpi-value {value_class}", "{value}" }
            if let Some(desc) = description {
                span { class: "muted", "{desc}" }
            }
        }
    }
}
