use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::theme,
    util::{
        assets,
        version::{version_label, APP_NAME, SUPPORT_EMAIL, SUPPORT_PHONE},
    },
};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                div { class: "brand",
                    img { src: assets::logo_data_uri(), alt: "{APP_NAME}", width: "36", height: "36" }
                    div {
                        h1 { "{APP_NAME}" }
                        p { class: "muted", "Courier, fulfilment and rides across Kenya" }
                    }
                }
                nav { class: "nav",
                    NavButton { active: matches!(current_route, Route::Home {}), onclick: move |_| { nav.push(Route::Home {}); }, label: "Home" }
                    NavButton { active: matches!(current_route, Route::Ship {}), onclick: move |_| { nav.push(Route::Ship {}); }, label: "📦 Send a parcel" }
                    NavButton { active: matches!(current_route, Route::Track {}), onclick: move |_| { nav.push(Route::Track {}); }, label: "🔎 Track" }
                    NavButton { active: matches!(current_route, Route::Ecommerce {}), onclick: move |_| { nav.push(Route::Ecommerce {}); }, label: "🏬 E-commerce" }
                    NavButton { active: matches!(current_route, Route::Partner {}), onclick: move |_| { nav.push(Route::Partner {}); }, label: "🤝 Partner" }
                    NavButton { active: matches!(current_route, Route::Rides {}), onclick: move |_| { nav.push(Route::Rides {}); }, label: "🚗 Rides" }
                }
            }
            main { class: "shell-main",
                {children}
            }
            footer { class: "shell-footer",
                span { "{version_label()}" }
                span { "Support: {SUPPORT_PHONE} · {SUPPORT_EMAIL}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
