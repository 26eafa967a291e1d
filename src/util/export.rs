//! Downloadable exports: the fulfilment audit report, single-order JSON and
//! the printable order summary.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use time::OffsetDateTime;

use crate::{
    domain::{FulfilmentEstimate, FulfilmentEstimateInput, ShipmentOrder},
    util::format::{date_stamp, display_timestamp, ksh, rfc3339},
};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode export: {0}")]
    Serde(#[from] serde_json::Error),
}

pub fn audit_filename(at: OffsetDateTime) -> String {
    format!("swiftpoint-audit-{}.txt", date_stamp(at))
}

pub fn order_filename(order: &ShipmentOrder) -> String {
    format!("{}.json", order.tracking_id)
}

pub fn summary_filename(order: &ShipmentOrder) -> String {
    format!("{}-summary.txt", order.tracking_id)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Line-delimited plain-text audit of one estimate.
pub fn audit_report(
    input: &FulfilmentEstimateInput,
    estimate: &FulfilmentEstimate,
    at: OffsetDateTime,
) -> String {
    let mut report = Vec::new();
    report.push("SwiftPoint Logistics — Detailed Fulfilment Audit".to_string());
    report.push(format!("Date: {}", rfc3339(at)));
    report.push("--- INPUTS ---".to_string());
    report.push(format!("Monthly Orders: {}", input.orders));
    report.push(format!("Avg Parcel Weight: {} kg", input.average_weight_kg));
    report.push(format!("COD Enabled: {}", yes_no(input.cod)));
    report.push(format!("Packaging: {}", input.packaging.key()));
    report.push(format!(
        "Storage Months: {} / Volume: {} m3",
        input.storage_months, input.storage_volume_m3
    ));
    report.push(format!("Insurance: {}", yes_no(input.insurance)));
    report.push(format!("Express Delivery: {}", yes_no(input.express)));
    report.push(format!("Selected Plan: {}", input.plan.key()));
    report.push(String::new());

    report.push("--- COST BREAKDOWN (KSh) ---".to_string());
    let lines = [
        ("Delivery per order", estimate.delivery_per_order),
        ("Delivery cost", estimate.delivery_cost),
        ("Packaging cost", estimate.packaging_cost),
        ("Storage cost", estimate.storage_cost),
        ("Insurance cost", estimate.insurance_cost),
        ("Express cost", estimate.express_cost),
        ("COD handling", estimate.cod_handling),
        ("Estimated total (payg)", estimate.payg_total),
        ("Estimated total (selected plan)", estimate.plan_total),
        ("Potential savings if using selected plan", estimate.savings),
    ];
    for (label, value) in lines {
        report.push(format!("{label}: {value:.2}"));
    }
    report.push(String::new());

    report.push("--- QUICK RECOMMENDATIONS ---".to_string());
    if estimate.savings > 0.0 {
        report.push(format!(
            "You save approx KSh {} by using the selected subscription plan.",
            estimate.savings.round()
        ));
    } else {
        report.push(
            "Subscription is not cheaper than pay-as-you-go for the inputs provided. \
             Consider increasing order volume or switching plans."
                .to_string(),
        );
    }
    report.push(
        "Consider branded packaging if customer retention is a priority; \
         consider express service only for premium SKUs."
            .to_string(),
    );

    let mut text = report.join("\n");
    text.push('\n');
    text
}

/// Plain-text shipment summary, laid out like the on-screen order panel.
pub fn order_summary(order: &ShipmentOrder) -> String {
    let costs = &order.cost_breakdown;
    let nature = if order.nature.is_empty() {
        "-".to_string()
    } else {
        order
            .nature
            .iter()
            .map(|tag| tag.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let lines = [
        "Shipment Summary".to_string(),
        format!("Tracking ID: {}", order.tracking_id),
        format!("Placed: {}", display_timestamp(&order.created_at)),
        format!("Status: {}", order.status),
        String::new(),
        format!("Sender: {} ({})", order.sender_name, order.sender_phone),
        format!("Pickup: {}", order.pickup_address),
        format!("Recipient: {} ({})", order.recipient_name, order.recipient_phone),
        format!("Drop-off: {}", order.dropoff_address),
        String::new(),
        format!(
            "Service: {} / {}",
            order.service_level.label(),
            order.package_type.label()
        ),
        format!("Zone: {}", order.delivery_zone.label()),
        format!("Nature: {nature}"),
        format!("Declared value: {}", ksh(order.declared_value)),
        String::new(),
        "Cost breakdown".to_string(),
        format!("Base: {}", ksh(costs.base as f64)),
        format!("Weight & zone charge: {}", ksh(costs.weight_charge as f64)),
        format!(
            "Handling & surcharges: {}",
            ksh(costs.handling_and_surcharges() as f64)
        ),
        format!("Insurance: {}", ksh(costs.insurance_fee as f64)),
        format!("COD fee: {}", ksh(costs.cod_fee as f64)),
        format!("Total: {}", ksh(costs.total as f64)),
    ];

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn order_json(order: &ShipmentOrder) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(order)?)
}

/// Writes an export into `dir`, creating it if needed, and returns the file path.
pub fn write_export(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(path)
}
