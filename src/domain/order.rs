//! Shipment order form state, submission rules and the locally kept order record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::shipment::{
    quote_shipment, DeliveryZone, Dimensions, NatureTag, PackageType, ServiceLevel, Shillings,
    ShipmentQuote, ShipmentQuoteInput,
};
use crate::util::parse_amount;

pub const PENDING_PICKUP: &str = "Pending pickup";

/// How many bookings the "recent" panel shows.
pub const RECENT_ORDERS: usize = 6;

/// Everything the order form holds. Numeric fields keep the raw text so a
/// half-typed value never gets rewritten under the user's cursor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub sender_name: String,
    pub sender_phone: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub pickup_date: String,
    pub zone: DeliveryZone,
    pub service: ServiceLevel,
    pub package: PackageType,
    pub nature: BTreeSet<NatureTag>,
    pub weight_kg: String,
    pub length_cm: String,
    pub width_cm: String,
    pub height_cm: String,
    pub declared_value: String,
    pub insurance: bool,
    pub cod: bool,
    pub cod_amount: String,
    pub special_instructions: String,
    pub terms_accepted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OrderAction {
    SetSenderName(String),
    SetSenderPhone(String),
    SetRecipientName(String),
    SetRecipientPhone(String),
    SetPickupAddress(String),
    SetDropoffAddress(String),
    SetPickupDate(String),
    SetZone(DeliveryZone),
    SetService(ServiceLevel),
    SetPackage(PackageType),
    ToggleNature(NatureTag),
    SetWeight(String),
    SetLength(String),
    SetWidth(String),
    SetHeight(String),
    SetDeclaredValue(String),
    SetInsurance(bool),
    SetCod(bool),
    SetCodAmount(String),
    SetSpecialInstructions(String),
    SetTermsAccepted(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please complete required fields (sender, recipient, pickup and drop-off).")]
    MissingFields(Vec<&'static str>),
    #[error("Please accept terms and conditions to proceed.")]
    TermsNotAccepted,
    #[error("Hazardous items require special handling. Please contact support for an arranged pickup.")]
    HazardousGoods,
}

impl OrderDraft {
    pub fn apply(self, action: OrderAction) -> Self {
        match action {
            OrderAction::SetSenderName(sender_name) => Self { sender_name, ..self },
            OrderAction::SetSenderPhone(sender_phone) => Self {
                sender_phone,
                ..self
            },
            OrderAction::SetRecipientName(recipient_name) => Self {
                recipient_name,
                ..self
            },
            OrderAction::SetRecipientPhone(recipient_phone) => Self {
                recipient_phone,
                ..self
            },
            OrderAction::SetPickupAddress(pickup_address) => Self {
                pickup_address,
                ..self
            },
            OrderAction::SetDropoffAddress(dropoff_address) => Self {
                dropoff_address,
                ..self
            },
            OrderAction::SetPickupDate(pickup_date) => Self { pickup_date, ..self },
            OrderAction::SetZone(zone) => Self { zone, ..self },
            OrderAction::SetService(service) => Self { service, ..self },
            OrderAction::SetPackage(package) => Self { package, ..self },
            OrderAction::ToggleNature(tag) => {
                let mut nature = self.nature;
                if !nature.remove(&tag) {
                    nature.insert(tag);
                }
                Self { nature, ..self }
            }
            OrderAction::SetWeight(weight_kg) => Self { weight_kg, ..self },
            OrderAction::SetLength(length_cm) => Self { length_cm, ..self },
            OrderAction::SetWidth(width_cm) => Self { width_cm, ..self },
            OrderAction::SetHeight(height_cm) => Self { height_cm, ..self },
            OrderAction::SetDeclaredValue(declared_value) => Self {
                declared_value,
                ..self
            },
            OrderAction::SetInsurance(insurance) => Self { insurance, ..self },
            OrderAction::SetCod(cod) => Self { cod, ..self },
            OrderAction::SetCodAmount(cod_amount) => Self { cod_amount, ..self },
            OrderAction::SetSpecialInstructions(special_instructions) => Self {
                special_instructions,
                ..self
            },
            OrderAction::SetTermsAccepted(terms_accepted) => Self {
                terms_accepted,
                ..self
            },
        }
    }

    /// Dimensions count only when all three sides are positive numbers.
    pub fn dimensions(&self) -> Option<Dimensions> {
        let length_cm = parse_amount(&self.length_cm);
        let width_cm = parse_amount(&self.width_cm);
        let height_cm = parse_amount(&self.height_cm);
        (length_cm > 0.0 && width_cm > 0.0 && height_cm > 0.0).then_some(Dimensions {
            length_cm,
            width_cm,
            height_cm,
        })
    }

    pub fn quote_input(&self) -> ShipmentQuoteInput {
        ShipmentQuoteInput {
            weight_kg: parse_amount(&self.weight_kg),
            dimensions: self.dimensions(),
            zone: self.zone,
            service: self.service,
            package: self.package,
            nature: self.nature.clone(),
            declared_value: parse_amount(&self.declared_value),
            insurance: self.insurance,
            cod: self.cod,
            cod_amount: parse_amount(&self.cod_amount),
        }
    }

    pub fn quote(&self) -> ShipmentQuote {
        quote_shipment(&self.quote_input())
    }

    pub fn is_hazardous(&self) -> bool {
        self.nature.contains(&NatureTag::Hazardous)
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("sender name", &self.sender_name),
            ("sender phone", &self.sender_phone),
            ("recipient name", &self.recipient_name),
            ("recipient phone", &self.recipient_phone),
            ("pickup address", &self.pickup_address),
            ("drop-off address", &self.dropoff_address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmissionError::MissingFields(missing));
        }
        if !self.terms_accepted {
            return Err(SubmissionError::TermsNotAccepted);
        }
        if self.is_hazardous() {
            return Err(SubmissionError::HazardousGoods);
        }
        Ok(())
    }

    /// Clears the booking fields after a successful submission; the sender stays.
    pub fn cleared(self) -> Self {
        Self {
            sender_name: self.sender_name,
            sender_phone: self.sender_phone,
            zone: self.zone,
            service: self.service,
            package: self.package,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub base: Shillings,
    /// Weight charge with the zone multiplier applied.
    pub weight_charge: Shillings,
    pub zone_multiplier: f64,
    pub fragile_surcharge: Shillings,
    pub perishable_surcharge: Shillings,
    #[serde(default)]
    pub electronics_surcharge: Shillings,
    #[serde(default)]
    pub liquid_surcharge: Shillings,
    pub insurance_fee: Shillings,
    pub cod_fee: Shillings,
    pub handling_fee: Shillings,
    pub other: Shillings,
    pub total: Shillings,
}

impl CostBreakdown {
    pub fn handling_and_surcharges(&self) -> Shillings {
        self.handling_fee
            + self.fragile_surcharge
            + self.perishable_surcharge
            + self.electronics_surcharge
            + self.liquid_surcharge
            + self.other
    }
}

impl From<&ShipmentQuote> for CostBreakdown {
    fn from(quote: &ShipmentQuote) -> Self {
        Self {
            base: quote.base,
            weight_charge: quote.weight_charge_with_zone,
            zone_multiplier: quote.zone_multiplier,
            fragile_surcharge: quote.fragile_surcharge,
            perishable_surcharge: quote.perishable_surcharge,
            electronics_surcharge: quote.electronics_surcharge,
            liquid_surcharge: quote.liquid_surcharge,
            insurance_fee: quote.insurance_fee,
            cod_fee: quote.cod_fee,
            handling_fee: quote.handling_fee,
            other: quote.other,
            total: quote.total,
        }
    }
}

/// A placed booking. Written once to the local order list and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentOrder {
    pub tracking_id: String,
    /// RFC 3339.
    pub created_at: String,
    pub status: String,
    pub sender_name: String,
    pub sender_phone: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_date: Option<String>,
    pub delivery_zone: DeliveryZone,
    pub service_level: ServiceLevel,
    pub package_type: PackageType,
    pub nature: Vec<NatureTag>,
    pub weight_kg: f64,
    #[serde(default)]
    pub dims_cm: Option<Dimensions>,
    pub declared_value: f64,
    pub insurance: bool,
    pub cod: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub cost_breakdown: CostBreakdown,
}

/// Validates the draft and turns it into an order record plus the cleared
/// draft the form should show next. Nothing is produced on failure.
pub fn place_order(
    draft: OrderDraft,
    tracking_id: String,
    created_at: String,
) -> Result<(ShipmentOrder, OrderDraft), SubmissionError> {
    draft.validate()?;

    let input = draft.quote_input();
    let quote = quote_shipment(&input);

    let order = ShipmentOrder {
        tracking_id,
        created_at,
        status: PENDING_PICKUP.to_string(),
        sender_name: draft.sender_name.trim().to_string(),
        sender_phone: draft.sender_phone.trim().to_string(),
        recipient_name: draft.recipient_name.trim().to_string(),
        recipient_phone: draft.recipient_phone.trim().to_string(),
        pickup_address: draft.pickup_address.trim().to_string(),
        dropoff_address: draft.dropoff_address.trim().to_string(),
        pickup_date: non_empty(&draft.pickup_date),
        delivery_zone: draft.zone,
        service_level: draft.service,
        package_type: draft.package,
        nature: draft.nature.iter().copied().collect(),
        weight_kg: input.weight_kg,
        dims_cm: input.dimensions,
        declared_value: input.declared_value,
        insurance: draft.insurance,
        cod: draft.cod,
        cod_amount: draft.cod.then_some(input.cod_amount),
        special_instructions: non_empty(&draft.special_instructions),
        cost_breakdown: CostBreakdown::from(&quote),
    };

    Ok((order, draft.cleared()))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> OrderDraft {
        [
            OrderAction::SetSenderName("Achieng".into()),
            OrderAction::SetSenderPhone("0722000000".into()),
            OrderAction::SetRecipientName("Kamau".into()),
            OrderAction::SetRecipientPhone("0733000000".into()),
            OrderAction::SetPickupAddress("Moi Avenue, Nairobi".into()),
            OrderAction::SetDropoffAddress("Nyali, Mombasa".into()),
            OrderAction::SetWeight("2".into()),
            OrderAction::SetTermsAccepted(true),
        ]
        .into_iter()
        .fold(OrderDraft::default(), OrderDraft::apply)
    }

    #[test]
    fn toggle_nature_adds_then_removes() {
        let draft = OrderDraft::default().apply(OrderAction::ToggleNature(NatureTag::Fragile));
        assert!(draft.nature.contains(&NatureTag::Fragile));
        let draft = draft.apply(OrderAction::ToggleNature(NatureTag::Fragile));
        assert!(draft.nature.is_empty());
    }

    #[test]
    fn partial_dimensions_are_ignored() {
        let draft = OrderDraft::default()
            .apply(OrderAction::SetLength("30".into()))
            .apply(OrderAction::SetWidth("20".into()));
        assert_eq!(draft.dimensions(), None);
        let draft = draft.apply(OrderAction::SetHeight("10".into()));
        assert!(draft.dimensions().is_some());
    }

    #[test]
    fn missing_fields_block_before_terms() {
        let draft = OrderDraft::default();
        match draft.validate() {
            Err(SubmissionError::MissingFields(fields)) => assert_eq!(fields.len(), 6),
            other => panic!("unexpected {other:?}"),
        }

        let whitespace = complete_draft().apply(OrderAction::SetRecipientName("   ".into()));
        assert_eq!(
            whitespace.validate(),
            Err(SubmissionError::MissingFields(vec!["recipient name"]))
        );
    }

    #[test]
    fn terms_checked_before_hazardous() {
        let draft = complete_draft()
            .apply(OrderAction::SetTermsAccepted(false))
            .apply(OrderAction::ToggleNature(NatureTag::Hazardous));
        assert_eq!(draft.validate(), Err(SubmissionError::TermsNotAccepted));
        let draft = draft.apply(OrderAction::SetTermsAccepted(true));
        assert_eq!(draft.validate(), Err(SubmissionError::HazardousGoods));
    }

    #[test]
    fn hazardous_goods_are_rejected_without_an_order() {
        let draft = complete_draft().apply(OrderAction::ToggleNature(NatureTag::Hazardous));
        let result = place_order(draft, "SP123456".into(), "2025-01-01T00:00:00Z".into());
        assert_eq!(result, Err(SubmissionError::HazardousGoods));
    }

    #[test]
    fn placed_order_carries_quote_and_clears_booking_fields() {
        let draft = complete_draft()
            .apply(OrderAction::SetCod(true))
            .apply(OrderAction::SetCodAmount("5000".into()))
            .apply(OrderAction::ToggleNature(NatureTag::Electronics));
        let (order, next) =
            place_order(draft, "SP654321".into(), "2025-01-01T08:00:00Z".into()).unwrap();

        assert_eq!(order.status, PENDING_PICKUP);
        assert_eq!(order.cod_amount, Some(5000.0));
        assert_eq!(order.cost_breakdown.electronics_surcharge, 40);
        assert_eq!(order.cost_breakdown.cod_fee, 100);
        assert_eq!(order.cost_breakdown.total, 120 + 80 + 60 + 40 + 100);
        assert_eq!(order.pickup_date, None);

        assert_eq!(next.sender_name, "Achieng");
        assert!(next.recipient_name.is_empty());
        assert!(next.weight_kg.is_empty());
        assert!(!next.terms_accepted);
        assert!(next.nature.is_empty());
        assert!(!next.cod);
    }

    #[test]
    fn cod_amount_omitted_when_cod_disabled() {
        let draft = complete_draft().apply(OrderAction::SetCodAmount("900".into()));
        let (order, _) = place_order(draft, "SP111111".into(), "t".into()).unwrap();
        assert_eq!(order.cod_amount, None);
        assert_eq!(order.cost_breakdown.cod_fee, 0);
    }
}
