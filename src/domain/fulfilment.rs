//! Monthly fulfilment cost projection for e-commerce merchants.

use serde::{Deserialize, Serialize};

use crate::util::parse_amount;

const BASE_RATE_PER_ORDER: f64 = 200.0;
const RATE_PER_EXTRA_KG: f64 = 50.0;
const STORAGE_RATE_PER_M3_MONTH: f64 = 500.0;
const INSURANCE_PER_ORDER: f64 = 15.0;
const EXPRESS_PER_ORDER: f64 = 120.0;
const COD_HANDLING_PCT: f64 = 0.015;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingTier {
    #[default]
    None,
    Standard,
    Eco,
    Branded,
}

impl PackagingTier {
    pub const ALL: [PackagingTier; 4] = [
        PackagingTier::None,
        PackagingTier::Standard,
        PackagingTier::Eco,
        PackagingTier::Branded,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "standard" => PackagingTier::Standard,
            "eco" => PackagingTier::Eco,
            "branded" => PackagingTier::Branded,
            _ => PackagingTier::None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PackagingTier::None => "none",
            PackagingTier::Standard => "standard",
            PackagingTier::Eco => "eco",
            PackagingTier::Branded => "branded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackagingTier::None => "None (merchant packs)",
            PackagingTier::Standard => "Standard - KSh 20 / order",
            PackagingTier::Eco => "Eco - KSh 35 / order",
            PackagingTier::Branded => "Branded - KSh 50 / order",
        }
    }

    pub fn rate_per_order(&self) -> f64 {
        match self {
            PackagingTier::None => 0.0,
            PackagingTier::Standard => 20.0,
            PackagingTier::Eco => 35.0,
            PackagingTier::Branded => 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Payg,
    Starter,
    Growth,
    Enterprise,
}

/// Fixed terms of a flat-fee subscription tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanTerms {
    pub flat_fee: f64,
    pub included_orders: u32,
    pub extra_per_order: f64,
    pub addon_discount: f64,
}

impl Plan {
    pub const ALL: [Plan; 4] = [Plan::Payg, Plan::Starter, Plan::Growth, Plan::Enterprise];

    pub fn key(&self) -> &'static str {
        match self {
            Plan::Payg => "payg",
            Plan::Starter => "starter",
            Plan::Growth => "growth",
            Plan::Enterprise => "enterprise",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Plan::Payg => "Pay-as-you-go",
            Plan::Starter => "Starter",
            Plan::Growth => "Growth",
            Plan::Enterprise => "Enterprise",
        }
    }

    /// `None` for pay-as-you-go.
    pub fn terms(&self) -> Option<PlanTerms> {
        match self {
            Plan::Payg => None,
            Plan::Starter => Some(PlanTerms {
                flat_fee: 30_000.0,
                included_orders: 200,
                extra_per_order: 100.0,
                addon_discount: 0.10,
            }),
            Plan::Growth => Some(PlanTerms {
                flat_fee: 60_000.0,
                included_orders: 600,
                extra_per_order: 90.0,
                addon_discount: 0.15,
            }),
            Plan::Enterprise => Some(PlanTerms {
                flat_fee: 150_000.0,
                included_orders: 2_000,
                extra_per_order: 70.0,
                addon_discount: 0.25,
            }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FulfilmentEstimateInput {
    pub orders: u32,
    pub average_weight_kg: f64,
    pub cod: bool,
    pub packaging: PackagingTier,
    pub storage_months: f64,
    pub storage_volume_m3: f64,
    pub insurance: bool,
    pub express: bool,
    pub plan: Plan,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FulfilmentEstimate {
    pub delivery_per_order: f64,
    pub delivery_cost: f64,
    pub packaging_cost: f64,
    pub storage_cost: f64,
    pub insurance_cost: f64,
    pub express_cost: f64,
    pub addons_cost: f64,
    pub cod_handling: f64,
    pub payg_total: f64,
    pub plan_total: f64,
    /// Negative when the selected plan costs more than pay-as-you-go.
    pub savings: f64,
}

pub fn estimate_fulfilment(input: &FulfilmentEstimateInput) -> FulfilmentEstimate {
    let orders = input.orders as f64;
    let average_weight = clamp_zero(input.average_weight_kg);

    let delivery_per_order =
        BASE_RATE_PER_ORDER + (average_weight - 1.0).max(0.0) * RATE_PER_EXTRA_KG;
    let delivery_cost = orders * delivery_per_order;

    let packaging_cost = orders * input.packaging.rate_per_order();
    let storage_cost = clamp_zero(input.storage_months)
        * clamp_zero(input.storage_volume_m3)
        * STORAGE_RATE_PER_M3_MONTH;
    let insurance_cost = if input.insurance {
        orders * INSURANCE_PER_ORDER
    } else {
        0.0
    };
    let express_cost = if input.express {
        orders * EXPRESS_PER_ORDER
    } else {
        0.0
    };
    let addons_cost = packaging_cost + storage_cost + insurance_cost + express_cost;

    // Collection cost applies to the undiscounted amount, whatever the plan.
    let cod_handling = if input.cod {
        (delivery_cost + addons_cost) * COD_HANDLING_PCT
    } else {
        0.0
    };

    let payg_total = delivery_cost + addons_cost + cod_handling;

    let plan_total = match input.plan.terms() {
        Some(terms) => {
            let extra_orders = input.orders.saturating_sub(terms.included_orders) as f64;
            terms.flat_fee
                + extra_orders * terms.extra_per_order
                + addons_cost * (1.0 - terms.addon_discount)
                + cod_handling
        }
        None => payg_total,
    };

    FulfilmentEstimate {
        delivery_per_order,
        delivery_cost,
        packaging_cost,
        storage_cost,
        insurance_cost,
        express_cost,
        addons_cost,
        cod_handling,
        payg_total,
        plan_total,
        savings: payg_total - plan_total,
    }
}

fn clamp_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Estimator form state; numeric fields keep the raw text the user typed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorDraft {
    pub orders: String,
    pub average_weight: String,
    pub cod: bool,
    pub packaging: PackagingTier,
    pub storage_months: String,
    pub storage_volume: String,
    pub insurance: bool,
    pub express: bool,
    pub plan: Plan,
}

impl Default for EstimatorDraft {
    fn default() -> Self {
        Self {
            orders: "100".to_string(),
            average_weight: "2".to_string(),
            cod: false,
            packaging: PackagingTier::None,
            storage_months: "0".to_string(),
            storage_volume: "1".to_string(),
            insurance: false,
            express: false,
            plan: Plan::Payg,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EstimatorAction {
    SetOrders(String),
    SetAverageWeight(String),
    SetCod(bool),
    SetPackaging(PackagingTier),
    SetStorageMonths(String),
    SetStorageVolume(String),
    SetInsurance(bool),
    SetExpress(bool),
    SelectPlan(Plan),
}

impl EstimatorDraft {
    pub fn apply(self, action: EstimatorAction) -> Self {
        match action {
            EstimatorAction::SetOrders(orders) => Self { orders, ..self },
            EstimatorAction::SetAverageWeight(average_weight) => Self {
                average_weight,
                ..self
            },
            EstimatorAction::SetCod(cod) => Self { cod, ..self },
            EstimatorAction::SetPackaging(packaging) => Self { packaging, ..self },
            EstimatorAction::SetStorageMonths(storage_months) => Self {
                storage_months,
                ..self
            },
            EstimatorAction::SetStorageVolume(storage_volume) => Self {
                storage_volume,
                ..self
            },
            EstimatorAction::SetInsurance(insurance) => Self { insurance, ..self },
            EstimatorAction::SetExpress(express) => Self { express, ..self },
            EstimatorAction::SelectPlan(plan) => Self { plan, ..self },
        }
    }

    pub fn input(&self) -> FulfilmentEstimateInput {
        FulfilmentEstimateInput {
            orders: parse_amount(&self.orders).floor() as u32,
            average_weight_kg: parse_amount(&self.average_weight),
            cod: self.cod,
            packaging: self.packaging,
            storage_months: parse_amount(&self.storage_months),
            storage_volume_m3: parse_amount(&self.storage_volume),
            insurance: self.insurance,
            express: self.express,
            plan: self.plan,
        }
    }

    pub fn estimate(&self) -> FulfilmentEstimate {
        estimate_fulfilment(&self.input())
    }
}
