use dioxus::prelude::*;

use crate::{
    app::Route,
    config::AppConfig,
    domain::{
        fulfilment::{estimate_fulfilment, EstimatorAction, PackagingTier, Plan},
        AppState,
    },
    ui::{
        components::{
            clipboard::copy_to_clipboard,
            cost_lines::{CostLines, CostRow},
            field::{CheckField, TextField},
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::{
        codes,
        export::{audit_filename, audit_report, write_export},
        format::{ksh, now},
    },
};

fn update_estimator(mut state: Signal<AppState>, action: EstimatorAction) {
    state.with_mut(|st| st.estimator = std::mem::take(&mut st.estimator).apply(action));
}

#[component]
pub fn EcommercePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let draft = state.with(|st| st.estimator.clone());
    let estimate = draft.estimate();

    let plan_note = match draft.plan.terms() {
        Some(terms) => format!(
            "{} includes {} orders for {}, then {} per order; add-ons {}% off.",
            draft.plan.label(),
            terms.included_orders,
            ksh(terms.flat_fee),
            ksh(terms.extra_per_order),
            (terms.addon_discount * 100.0).round()
        ),
        None => "Pay only for what you ship. No monthly commitment.".to_string(),
    };

    let rows = vec![
        CostRow::new(
            format!("Delivery ({} per order)", ksh(estimate.delivery_per_order)),
            estimate.delivery_cost,
        ),
        CostRow::new("Packaging", estimate.packaging_cost),
        CostRow::new("Storage", estimate.storage_cost),
        CostRow::new("Insurance", estimate.insurance_cost),
        CostRow::new("Express", estimate.express_cost),
        CostRow::new("COD handling (1.5%)", estimate.cod_handling),
    ];

    rsx! {
        div { class: "page",
            div { class: "hero",
                h1 { "Fulfilment for online sellers" }
                p { "Pickup, packing, storage and cash collection. Estimate your monthly bill before you sign up." }
            }
            div { class: "split",
                div { class: "panel stack",
                    h3 { class: "panel-title", "Monthly volume" }
                    div { class: "grid-2",
                        TextField { label: "Orders per month", kind: "number", value: draft.orders.clone(), oninput: move |v| update_estimator(state, EstimatorAction::SetOrders(v)) }
                        TextField { label: "Average parcel weight (kg)", kind: "number", value: draft.average_weight.clone(), oninput: move |v| update_estimator(state, EstimatorAction::SetAverageWeight(v)) }
                        TextField { label: "Storage months", kind: "number", value: draft.storage_months.clone(), oninput: move |v| update_estimator(state, EstimatorAction::SetStorageMonths(v)) }
                        TextField { label: "Storage volume (m³)", kind: "number", value: draft.storage_volume.clone(), oninput: move |v| update_estimator(state, EstimatorAction::SetStorageVolume(v)) }
                    }
                    div {
                        label { class: theme::LABEL, "Packaging" }
                        select {
                            class: "select",
                            onchange: move |evt| update_estimator(state, EstimatorAction::SetPackaging(PackagingTier::from_key(&evt.value()))),
                            for tier in PackagingTier::ALL {
                                option { value: tier.key(), selected: tier == draft.packaging, "{tier.label()}" }
                            }
                        }
                    }
                    div { class: "row",
                        CheckField { label: "Cash on delivery", checked: draft.cod, onchange: move |v| update_estimator(state, EstimatorAction::SetCod(v)) }
                        CheckField { label: "Insurance", checked: draft.insurance, onchange: move |v| update_estimator(state, EstimatorAction::SetInsurance(v)) }
                        CheckField { label: "Express delivery", checked: draft.express, onchange: move |v| update_estimator(state, EstimatorAction::SetExpress(v)) }
                    }
                    h3 { class: "panel-title", "Plan" }
                    div { class: "row",
                        for plan in Plan::ALL {
                            button {
                                class: theme::choice_button(plan == draft.plan),
                                r#type: "button",
                                onclick: move |_| update_estimator(state, EstimatorAction::SelectPlan(plan)),
                                "{plan.label()}"
                            }
                        }
                    }
                    p { class: "muted", "{plan_note}" }
                }
                div { class: "stack",
                    KpiCard { title: "Estimated monthly total", value: ksh(estimate.plan_total), description: format!("{} on pay-as-you-go", ksh(estimate.payg_total)) }
                    KpiCard {
                        title: "Savings vs pay-as-you-go",
                        value: ksh(estimate.savings),
                        tone: theme::signed_amount(estimate.savings),
                    }
                    div { class: theme::PANEL,
                        h3 { class: "panel-title", "Breakdown" }
                        CostLines { rows, total_label: "Plan total", total: estimate.plan_total }
                    }
                    AuditExport {}
                    ReferralPanel {}
                    button {
                        class: "btn",
                        onclick: move |_| { nav.push(Route::Partner {}); },
                        "Become a partner →"
                    }
                }
            }
        }
    }
}

#[component]
fn AuditExport() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<AppConfig>();

    let on_export = move |_| {
        let input = state.with(|st| st.estimator.input());
        let estimate = estimate_fulfilment(&input);
        let at = now();
        let report = audit_report(&input, &estimate, at);

        match write_export(&config.export_dir, &audit_filename(at), &report) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "audit report written");
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Audit report saved to {}", path.display()),
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "audit export failed");
                push_toast(toasts, ToastKind::Error, format!("Export failed: {err}"));
            }
        }
    };

    rsx! {
        div { class: "panel stack",
            h3 { class: "panel-title", "Detailed audit" }
            p { class: "muted", "A line-by-line report of this estimate with recommendations." }
            button { class: theme::BTN_PRIMARY, onclick: on_export, "Download audit report" }
        }
    }
}

#[component]
fn ReferralPanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<AppConfig>();

    let link = state.with(|st| {
        st.referral_code
            .as_deref()
            .map(|code| codes::referral_link(&config.site_origin, code).to_string())
    });

    let on_generate = {
        let origin = config.site_origin.clone();
        move |_| {
            let code = match state.with(|st| st.referral_code.clone()) {
                Some(code) => code,
                None => {
                    let code = codes::referral_code(&mut rand::thread_rng());
                    tracing::info!(code = %code, "referral code generated");
                    state.with_mut(|st| st.referral_code = Some(code.clone()));
                    code
                }
            };
            let link = codes::referral_link(&origin, &code);
            copy_to_clipboard(toasts, link.as_str(), "Referral link copied.");
        }
    };

    rsx! {
        div { class: "panel stack",
            h3 { class: "panel-title", "Refer a merchant" }
            if let Some(link) = link {
                code { "{link}" }
            } else {
                p { class: "muted", "Share SwiftPoint with another seller." }
            }
            button { class: "btn", onclick: on_generate, "Copy referral link" }
        }
    }
}
