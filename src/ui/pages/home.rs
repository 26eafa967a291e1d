use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::AppState,
    ui::{components::kpi_card::KpiCard, theme},
    util::{
        format::ksh,
        version::{SUPPORT_EMAIL, SUPPORT_PHONE},
    },
};

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let (bookings, spent) = state.with(|st| {
        let spent: u64 = st.orders.iter().map(|order| order.cost_breakdown.total).sum();
        (st.orders.len(), spent)
    });

    rsx! {
        div { class: "page",
            div { class: "hero",
                h1 { "Fast, reliable delivery across Kenya" }
                p { "Same-day courier in Nairobi, next-day countrywide, and fulfilment for online stores." }
            }
            div { class: "grid-3",
                ServiceCard {
                    title: "📦 Send a parcel",
                    blurb: "Instant quote, pickup at your door and a tracking ID on booking.",
                    onclick: move |_| { nav.push(Route::Ship {}); },
                }
                ServiceCard {
                    title: "🔎 Track a shipment",
                    blurb: "Check where your parcel is with its SP tracking ID.",
                    onclick: move |_| { nav.push(Route::Track {}); },
                }
                ServiceCard {
                    title: "🏬 E-commerce fulfilment",
                    blurb: "Estimate your monthly costs and compare subscription plans.",
                    onclick: move |_| { nav.push(Route::Ecommerce {}); },
                }
                ServiceCard {
                    title: "🚗 Rides",
                    blurb: "Airport transfers and city rides with upfront fares.",
                    onclick: move |_| { nav.push(Route::Rides {}); },
                }
            }
            if bookings > 0 {
                div { class: "grid-2",
                    KpiCard { title: "Bookings on this device", value: bookings.to_string() }
                    KpiCard { title: "Total booked", value: ksh(spent as f64) }
                }
            }
            div { class: theme::PANEL,
                h3 { class: "panel-title", "Talk to us" }
                p { "Call {SUPPORT_PHONE} or email {SUPPORT_EMAIL}. We answer every day from 7am to 9pm." }
            }
        }
    }
}

#[component]
fn ServiceCard(title: &'static str, blurb: &'static str, onclick: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "panel card-link",
            onclick: move |_| onclick.call(()),
            h3 { class: "panel-title", "{title}" }
            p { class: "muted", "{blurb}" }
        }
    }
}
