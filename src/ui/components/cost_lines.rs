use dioxus::prelude::*;

use crate::util::format::ksh;

#[derive(Clone, Debug, PartialEq)]
pub struct CostRow {
    pub label: String,
    pub amount: f64,
}

impl CostRow {
    pub fn new(label: impl Into<String>, amount: impl Into<f64>) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
        }
    }
}

/// Itemised cost list with a bold total underneath.
#[component]
pub fn CostLines(rows: Vec<CostRow>, #[props(into)] total_label: String, total: f64) -> Element {
    rsx! {
        ul {
            class: "cost-list",
            for row in rows {
                li { class: "cost-line",
                    span { "{row.label}" }
                    span { "{ksh(row.amount)}" }
                }
            }
        }
        div { class: "cost-line cost-total",
            span { "{total_label}" }
            span { "{ksh(total)}" }
        }
    }
}
