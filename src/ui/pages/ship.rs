use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, LocalStore},
    config::AppConfig,
    domain::{
        order::{place_order, OrderAction, OrderDraft, ShipmentOrder},
        shipment::{DeliveryZone, NatureTag, PackageType, ServiceLevel},
        AppState,
    },
    ui::{
        components::{
            clipboard::copy_to_clipboard,
            cost_lines::{CostLines, CostRow},
            field::{CheckField, TextArea, TextField},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::{
        codes,
        export::{order_filename, order_json, order_summary, summary_filename, write_export},
        format::{display_timestamp, ksh, now, rfc3339},
    },
};

fn update_draft(mut state: Signal<AppState>, action: OrderAction) {
    state.with_mut(|st| st.order_draft = std::mem::take(&mut st.order_draft).apply(action));
}

#[component]
pub fn ShipPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let store = use_context::<Signal<LocalStore>>();

    let draft = state.with(|st| st.order_draft.clone());
    let last_order = state.with(|st| st.last_order.clone());
    let recent = state.with(|st| st.recent_orders().to_vec());

    let on_submit = {
        let mut state = state;
        move |evt: FormEvent| {
            evt.prevent_default();
            let draft = state.with(|st| st.order_draft.clone());
            let tracking_id = codes::tracking_id(&mut rand::thread_rng());

            match place_order(draft, tracking_id, rfc3339(now())) {
                Ok((order, next)) => {
                    tracing::info!(
                        tracking_id = %order.tracking_id,
                        total = order.cost_breakdown.total,
                        zone = order.delivery_zone.key(),
                        "order placed"
                    );
                    let message = format!(
                        "Order created. Tracking ID: {}. Summary displayed.",
                        order.tracking_id
                    );
                    state.with_mut(|st| {
                        st.record_order(order);
                        st.order_draft = next;
                    });
                    persist_user_state(store, &state);
                    push_toast(toasts, ToastKind::Success, message);
                }
                Err(err) => {
                    tracing::debug!(error = ?err, "order rejected");
                    push_toast(toasts, ToastKind::Error, err.to_string());
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            div {
                h2 { style: "margin: 0", "Send a parcel" }
                p { class: "muted", "Book a pickup anywhere in Kenya. Prices update as you type." }
            }
            div { class: "split",
                form { class: "panel stack", onsubmit: on_submit,
                    OrderFields { state, draft: draft.clone() }
                    div { class: "row",
                        button { class: theme::BTN_PRIMARY, r#type: "submit", "Place order" }
                        QuickEstimate { draft: draft.clone() }
                    }
                }
                div { class: "stack",
                    QuotePreview { draft: draft.clone() }
                    if let Some(order) = last_order {
                        OrderSummary { order }
                    }
                    RecentOrders { orders: recent }
                }
            }
        }
    }
}

#[component]
fn OrderFields(state: Signal<AppState>, draft: OrderDraft) -> Element {
    let hazardous = draft.is_hazardous();
    rsx! {
        h3 { class: "panel-title", "Sender & recipient" }
        div { class: "grid-2",
            TextField { label: "Sender name", value: draft.sender_name.clone(), required: true, oninput: move |v| update_draft(state, OrderAction::SetSenderName(v)) }
            TextField { label: "Sender phone", kind: "tel", value: draft.sender_phone.clone(), required: true, placeholder: "07xx xxx xxx", oninput: move |v| update_draft(state, OrderAction::SetSenderPhone(v)) }
            TextField { label: "Recipient name", value: draft.recipient_name.clone(), required: true, oninput: move |v| update_draft(state, OrderAction::SetRecipientName(v)) }
            TextField { label: "Recipient phone", kind: "tel", value: draft.recipient_phone.clone(), required: true, placeholder: "07xx xxx xxx", oninput: move |v| update_draft(state, OrderAction::SetRecipientPhone(v)) }
            TextField { label: "Pickup address", value: draft.pickup_address.clone(), required: true, oninput: move |v| update_draft(state, OrderAction::SetPickupAddress(v)) }
            TextField { label: "Drop-off address", value: draft.dropoff_address.clone(), required: true, oninput: move |v| update_draft(state, OrderAction::SetDropoffAddress(v)) }
            TextField { label: "Pickup date", kind: "date", value: draft.pickup_date.clone(), oninput: move |v| update_draft(state, OrderAction::SetPickupDate(v)) }
        }

        h3 { class: "panel-title", "Service" }
        div { class: "grid-3",
            div {
                label { class: theme::LABEL, "Delivery zone" }
                select {
                    class: "select",
                    onchange: move |evt| update_draft(state, OrderAction::SetZone(DeliveryZone::from_key(&evt.value()))),
                    for zone in DeliveryZone::ALL {
                        option { value: zone.key(), selected: zone == draft.zone, "{zone.label()}" }
                    }
                }
            }
            div {
                label { class: theme::LABEL, "Service level" }
                select {
                    class: "select",
                    onchange: move |evt| update_draft(state, OrderAction::SetService(ServiceLevel::from_key(&evt.value()))),
                    for service in ServiceLevel::ALL {
                        option { value: service.key(), selected: service == draft.service, "{service.label()}" }
                    }
                }
            }
            div {
                label { class: theme::LABEL, "Package type" }
                select {
                    class: "select",
                    onchange: move |evt| update_draft(state, OrderAction::SetPackage(PackageType::from_key(&evt.value()))),
                    for package in PackageType::ALL {
                        option { value: package.key(), selected: package == draft.package, "{package.label()}" }
                    }
                }
            }
        }

        h3 { class: "panel-title", "Parcel" }
        div { class: "row",
            for tag in NatureTag::ALL {
                span { class: "chip",
                    CheckField {
                        label: tag.label().to_string(),
                        checked: draft.nature.contains(&tag),
                        onchange: move |_| update_draft(state, OrderAction::ToggleNature(tag)),
                    }
                }
            }
        }
        if hazardous {
            p { class: "error-text", "Hazardous items cannot be booked online. Contact support to arrange a pickup." }
        }
        div { class: "grid-3",
            TextField { label: "Weight (kg)", kind: "number", value: draft.weight_kg.clone(), oninput: move |v| update_draft(state, OrderAction::SetWeight(v)) }
            TextField { label: "Length (cm)", kind: "number", value: draft.length_cm.clone(), oninput: move |v| update_draft(state, OrderAction::SetLength(v)) }
            TextField { label: "Width (cm)", kind: "number", value: draft.width_cm.clone(), oninput: move |v| update_draft(state, OrderAction::SetWidth(v)) }
            TextField { label: "Height (cm)", kind: "number", value: draft.height_cm.clone(), oninput: move |v| update_draft(state, OrderAction::SetHeight(v)) }
            TextField { label: "Declared value (KSh)", kind: "number", value: draft.declared_value.clone(), oninput: move |v| update_draft(state, OrderAction::SetDeclaredValue(v)) }
        }
        div { class: "row",
            CheckField { label: "Insure this parcel (1%, min KSh 50)", checked: draft.insurance, onchange: move |v| update_draft(state, OrderAction::SetInsurance(v)) }
            CheckField { label: "Cash on delivery (2%, min KSh 50)", checked: draft.cod, onchange: move |v| update_draft(state, OrderAction::SetCod(v)) }
        }
        if draft.cod {
            TextField { label: "Amount to collect (KSh)", kind: "number", value: draft.cod_amount.clone(), oninput: move |v| update_draft(state, OrderAction::SetCodAmount(v)) }
        }
        TextArea { label: "Special instructions", value: draft.special_instructions.clone(), placeholder: "Gate codes, landmarks, handling notes", oninput: move |v| update_draft(state, OrderAction::SetSpecialInstructions(v)) }
        CheckField { label: "I accept the terms and conditions", checked: draft.terms_accepted, onchange: move |v| update_draft(state, OrderAction::SetTermsAccepted(v)) }
    }
}

#[component]
fn QuickEstimate(draft: OrderDraft) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    rsx! {
        button {
            class: "btn",
            r#type: "button",
            onclick: move |_| {
                let total = draft.quote().total;
                push_toast(toasts, ToastKind::Info, format!("Estimated total: {}", ksh(total as f64)));
            },
            "Quick estimate"
        }
    }
}

#[component]
fn QuotePreview(draft: OrderDraft) -> Element {
    let quote = draft.quote();
    let rows = vec![
        CostRow::new(format!("Base ({})", draft.service.label()), quote.base as f64),
        CostRow::new(
            format!("Weight {} kg × zone {}", quote.billable_weight_kg, quote.zone_multiplier),
            quote.weight_charge_with_zone as f64,
        ),
        CostRow::new("Handling & extras", quote.handling_and_extras() as f64),
        CostRow::new("Insurance", quote.insurance_fee as f64),
        CostRow::new("COD fee", quote.cod_fee as f64),
    ];

    rsx! {
        div { class: theme::PANEL,
            h3 { class: "panel-title", "Live quote" }
            if quote.volumetric_kg > 0.0 {
                p { class: "muted", "Volumetric weight {quote.volumetric_kg} kg" }
            }
            CostLines { rows, total_label: "Total", total: quote.total as f64 }
        }
    }
}

#[component]
fn OrderSummary(order: ShipmentOrder) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<AppConfig>();

    let breakdown = &order.cost_breakdown;
    let rows = vec![
        CostRow::new("Base", breakdown.base as f64),
        CostRow::new("Weight charge", breakdown.weight_charge as f64),
        CostRow::new("Handling & surcharges", breakdown.handling_and_surcharges() as f64),
        CostRow::new("Insurance", breakdown.insurance_fee as f64),
        CostRow::new("COD fee", breakdown.cod_fee as f64),
    ];
    let total = breakdown.total as f64;
    let created = display_timestamp(&order.created_at);

    let copy_id = {
        let tracking_id = order.tracking_id.clone();
        move |_| copy_to_clipboard(toasts, &tracking_id, "Tracking ID copied.")
    };

    let export = {
        let order = order.clone();
        let config = config.clone();
        move |_| {
            let written = order_json(&order).and_then(|json| {
                write_export(&config.export_dir, &order_filename(&order), &json)
            });
            match written {
                Ok(path) => push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Order saved to {}", path.display()),
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "order export failed");
                    push_toast(toasts, ToastKind::Error, format!("Export failed: {err}"));
                }
            }
        }
    };

    let print = {
        let order = order.clone();
        move |_| {
            let summary = order_summary(&order);
            match write_export(&config.export_dir, &summary_filename(&order), &summary) {
                Ok(path) => push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Summary saved to {}", path.display()),
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "order summary export failed");
                    push_toast(toasts, ToastKind::Error, format!("Export failed: {err}"));
                }
            }
        }
    };

    rsx! {
        div { class: theme::PANEL,
            h3 { class: "panel-title", "Order summary" }
            div { class: "stack",
                div { class: "cost-line",
                    span { class: "muted", "Tracking ID" }
                    strong { "{order.tracking_id}" }
                }
                div { class: "cost-line",
                    span { class: "muted", "Status" }
                    span { "{order.status}" }
                }
                div { class: "cost-line",
                    span { class: "muted", "Created" }
                    span { "{created}" }
                }
                p { class: "muted", "{order.pickup_address} → {order.dropoff_address} · {order.delivery_zone.label()}" }
                CostLines { rows, total_label: "Total", total }
                div { class: "row",
                    button { class: "btn", r#type: "button", onclick: copy_id, "Copy tracking ID" }
                    button { class: "btn", r#type: "button", onclick: export, "Export JSON" }
                    button { class: theme::BTN_PRIMARY, r#type: "button", onclick: print, "Print summary" }
                }
            }
        }
    }
}

#[component]
fn RecentOrders(orders: Vec<ShipmentOrder>) -> Element {
    rsx! {
        div { class: theme::PANEL,
            h3 { class: "panel-title", "Recent bookings" }
            if orders.is_empty() {
                p { class: "muted", "No bookings yet." }
            } else {
                ul { class: "order-list",
                    for order in orders {
                        li { key: "{order.tracking_id}",
                            div { class: "cost-line",
                                strong { "{order.tracking_id}" }
                                span { "{ksh(order.cost_breakdown.total as f64)}" }
                            }
                            div { class: "muted", "{order.recipient_name} · {order.status} · {display_timestamp(&order.created_at)}" }
                        }
                    }
                }
            }
        }
    }
}
