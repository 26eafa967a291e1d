use dioxus::prelude::*;

use crate::{
    app::{forget_ride_draft, persist_user_state, LocalStore},
    config::AppConfig,
    domain::{
        rides::{cars_in_category, categories, find_car, RideAction},
        AppState,
    },
    ui::{
        components::{
            field::{CheckField, TextField},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::{
        export::write_export,
        format::{date_and_time, ksh, now},
    },
};

const SUMMARY_FILENAME: &str = "booking-summary.txt";

/// Applies one form edit and writes the draft straight back to local storage.
fn update_ride(store: Signal<LocalStore>, mut state: Signal<AppState>, action: RideAction) {
    state.with_mut(|st| st.update_ride(action));
    persist_user_state(store, &state);
}

#[component]
pub fn RidesPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let store = use_context::<Signal<LocalStore>>();
    let config = use_context::<AppConfig>();

    let draft = state.with(|st| st.ride_draft.clone());
    let car = draft.car();
    let fare = draft.fare();
    let cars = cars_in_category(&draft.selected_category).collect::<Vec<_>>();

    let on_book = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = state.with(|st| st.ride_draft.clone());
        if draft.pickup.trim().is_empty() || draft.destination.trim().is_empty() {
            push_toast(toasts, ToastKind::Error, "Enter a pickup point and a destination.");
            return;
        }
        let fare = draft.fare();
        tracing::info!(
            pickup = %draft.pickup,
            destination = %draft.destination,
            when = %draft.when_label(),
            car = draft.car().id,
            fare = fare.fare,
            "ride booking requested"
        );
        state.with_mut(|st| st.ride_booked());
        forget_ride_draft(store);
        push_toast(
            toasts,
            ToastKind::Success,
            "Booking requested! A driver will confirm shortly.",
        );
    };

    let on_download = move |_| {
        let summary = state.with(|st| st.ride_draft.summary());
        match write_export(&config.export_dir, SUMMARY_FILENAME, &summary) {
            Ok(path) => push_toast(
                toasts,
                ToastKind::Success,
                format!("Summary saved to {}", path.display()),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "ride summary export failed");
                push_toast(toasts, ToastKind::Error, format!("Export failed: {err}"));
            }
        }
    };

    rsx! {
        div { class: "page",
            div { class: "hero",
                h1 { "Rides" }
                p { "Comfortable cars with professional drivers, now or at a time you choose." }
            }
            div { class: "split",
                form { class: "panel stack", onsubmit: on_book,
                    div { class: "grid-2",
                        TextField { label: "Pickup", value: draft.pickup.clone(), placeholder: "e.g. JKIA Terminal 1A", oninput: move |v| update_ride(store, state, RideAction::SetPickup(v)) }
                        TextField { label: "Destination", value: draft.destination.clone(), placeholder: "e.g. Westlands", oninput: move |v| update_ride(store, state, RideAction::SetDestination(v)) }
                    }
                    CheckField {
                        label: "Leave now",
                        checked: draft.asap,
                        onchange: move |asap| {
                            let (date, time) = date_and_time(now());
                            update_ride(store, state, RideAction::SetAsap { asap, date, time });
                        },
                    }
                    if !draft.asap {
                        div { class: "grid-2",
                            TextField { label: "Date", kind: "date", value: draft.date.clone(), oninput: move |v| update_ride(store, state, RideAction::SetDate(v)) }
                            TextField { label: "Time", kind: "time", value: draft.time.clone(), oninput: move |v| update_ride(store, state, RideAction::SetTime(v)) }
                        }
                    }
                    div {
                        label { class: theme::LABEL, "Category" }
                        select {
                            class: "select",
                            onchange: move |evt| update_ride(store, state, RideAction::SelectCategory(evt.value())),
                            for category in categories() {
                                option { value: category, selected: category == draft.selected_category, "{category}" }
                            }
                        }
                    }
                    div { class: "grid-2",
                        for option_car in cars {
                            CarCard {
                                key: "{option_car.id}",
                                car_id: option_car.id,
                                selected: option_car.id == car.id,
                            }
                        }
                    }
                    div { class: "row",
                        button { class: theme::BTN_PRIMARY, r#type: "submit", "Request ride" }
                        button { class: "btn", r#type: "button", onclick: on_download, "Download summary" }
                    }
                }
                div { class: "panel stack",
                    h3 { class: "panel-title", "Trip estimate" }
                    div { class: "cost-line", span { class: "muted", "Car" } span { "{car.name}" } }
                    div { class: "cost-line", span { class: "muted", "When" } span { "{draft.when_label()}" } }
                    div { class: "cost-line", span { class: "muted", "Distance (est.)" } span { "{fare.distance_km} km" } }
                    div { class: "cost-line", span { class: "muted", "Pickup ETA" } span { "{car.eta_min} min" } }
                    div { class: "cost-line cost-total", span { "Fare" } span { "{ksh(fare.fare as f64)}" } }
                    p { class: "muted", "Final fare depends on the actual route and waiting time." }
                }
            }
        }
    }
}

#[component]
fn CarCard(car_id: &'static str, selected: bool) -> Element {
    let state = use_context::<Signal<AppState>>();
    let store = use_context::<Signal<LocalStore>>();
    let car = find_car(car_id);

    rsx! {
        button {
            class: theme::choice_button(selected),
            r#type: "button",
            onclick: move |_| update_ride(store, state, RideAction::SelectCar(car_id.to_string())),
            div { class: "stack",
                strong { "{car.name}" }
                span { class: "muted", "{car.seats} seats · {car.luggage} bags · ★ {car.rating}" }
                span { "from {ksh(car.price_base)} + {ksh(car.price_per_km)}/km" }
            }
        }
    }
}
