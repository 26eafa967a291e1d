use dioxus::prelude::*;

use crate::{
    domain::partner::{PartnerInquiry, BUSINESS_TYPES},
    ui::{
        components::{
            field::{TextArea, TextField},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::version::{SUPPORT_EMAIL, SUPPORT_PHONE},
};

#[component]
pub fn PartnerPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut inquiry = use_signal(PartnerInquiry::default);
    let mut submitted = use_signal(|| false);

    let form = inquiry();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = inquiry();
        match current.validate() {
            Ok(()) => {
                tracing::info!(
                    company = %current.company_name,
                    business_type = %current.business_type,
                    monthly_orders = %current.monthly_orders,
                    "partner inquiry submitted"
                );
                submitted.set(true);
                push_toast(
                    toasts,
                    ToastKind::Success,
                    "Thank you! Our partnerships team will contact you within 2 business days.",
                );
            }
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    if submitted() {
        return rsx! {
            div { class: "page",
                div { class: "panel stack",
                    h2 { class: "panel-title", "Inquiry received" }
                    p { "Thanks, {form.contact_person}. We will reach out to {form.email} about {form.company_name}." }
                    p { class: "muted", "Questions in the meantime? Call {SUPPORT_PHONE} or write to {SUPPORT_EMAIL}." }
                    div { class: "row",
                        button {
                            class: "btn",
                            onclick: move |_| {
                                inquiry.set(PartnerInquiry::default());
                                submitted.set(false);
                            },
                            "Send another inquiry"
                        }
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "page",
            div { class: "hero",
                h1 { "Partner with SwiftPoint" }
                p { "Dedicated account management, API integration and volume pricing for growing merchants." }
            }
            form { class: "panel stack", onsubmit: on_submit,
                div { class: "grid-2",
                    TextField { label: "Company name", required: true, value: form.company_name.clone(), oninput: move |v| inquiry.with_mut(|f| f.company_name = v) }
                    TextField { label: "Contact person", required: true, value: form.contact_person.clone(), oninput: move |v| inquiry.with_mut(|f| f.contact_person = v) }
                    TextField { label: "Email", kind: "email", required: true, value: form.email.clone(), oninput: move |v| inquiry.with_mut(|f| f.email = v) }
                    TextField { label: "Phone number", kind: "tel", required: true, value: form.phone.clone(), oninput: move |v| inquiry.with_mut(|f| f.phone = v) }
                    div {
                        label { class: theme::LABEL, "Business type *" }
                        select {
                            class: "select",
                            onchange: move |evt| inquiry.with_mut(|f| f.business_type = evt.value()),
                            option { value: "", selected: form.business_type.is_empty(), "Select…" }
                            for (value, label) in BUSINESS_TYPES {
                                option { value: value, selected: form.business_type == value, "{label}" }
                            }
                        }
                    }
                    TextField { label: "Monthly orders", kind: "number", value: form.monthly_orders.clone(), oninput: move |v| inquiry.with_mut(|f| f.monthly_orders = v) }
                    TextField { label: "Average parcel weight (kg)", kind: "number", value: form.average_parcel_weight.clone(), oninput: move |v| inquiry.with_mut(|f| f.average_parcel_weight = v) }
                }
                TextArea { label: "Special requirements", value: form.special_requirements.clone(), oninput: move |v| inquiry.with_mut(|f| f.special_requirements = v) }
                TextArea { label: "Integration needs", value: form.integration_needs.clone(), placeholder: "Shopify, WooCommerce, custom API…", oninput: move |v| inquiry.with_mut(|f| f.integration_needs = v) }
                TextArea { label: "Message", value: form.message.clone(), oninput: move |v| inquiry.with_mut(|f| f.message = v) }
                div { class: "row",
                    button { class: theme::BTN_PRIMARY, r#type: "submit", "Submit inquiry" }
                }
            }
        }
    }
}
