//! Shipment pricing for the logistics order form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Whole Kenyan shillings.
pub type Shillings = u64;

const PER_KG_RATE: f64 = 40.0;
const VOLUMETRIC_DIVISOR: f64 = 5000.0;
const INSURANCE_RATE: f64 = 0.01;
const INSURANCE_MINIMUM: Shillings = 50;
const COD_RATE: f64 = 0.02;
const COD_MINIMUM: Shillings = 50;
const PALLET_HANDLING_FEE: Shillings = 300;
const STANDARD_HANDLING_FEE: Shillings = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryZone {
    #[default]
    #[serde(rename = "within_city")]
    WithinCity,
    #[serde(rename = "intercity")]
    Intercity,
    #[serde(rename = "national")]
    National,
    #[serde(rename = "international")]
    International,
}

impl DeliveryZone {
    pub const ALL: [DeliveryZone; 4] = [
        DeliveryZone::WithinCity,
        DeliveryZone::Intercity,
        DeliveryZone::National,
        DeliveryZone::International,
    ];

    /// Unknown keys fall back to within-city.
    pub fn from_key(key: &str) -> Self {
        match key {
            "intercity" => DeliveryZone::Intercity,
            "national" => DeliveryZone::National,
            "international" => DeliveryZone::International,
            _ => DeliveryZone::WithinCity,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DeliveryZone::WithinCity => "within_city",
            DeliveryZone::Intercity => "intercity",
            DeliveryZone::National => "national",
            DeliveryZone::International => "international",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryZone::WithinCity => "Within city (0–20 km)",
            DeliveryZone::Intercity => "Intercity (20–200 km)",
            DeliveryZone::National => "National (200+ km)",
            DeliveryZone::International => "International",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            DeliveryZone::WithinCity => 1.0,
            DeliveryZone::Intercity => 1.35,
            DeliveryZone::National => 2.2,
            DeliveryZone::International => 6.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLevel {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "express")]
    Express,
    #[serde(rename = "same-day")]
    SameDay,
}

impl ServiceLevel {
    pub const ALL: [ServiceLevel; 3] = [
        ServiceLevel::Standard,
        ServiceLevel::Express,
        ServiceLevel::SameDay,
    ];

    /// Unknown keys fall back to standard.
    pub fn from_key(key: &str) -> Self {
        match key {
            "express" => ServiceLevel::Express,
            "same-day" => ServiceLevel::SameDay,
            _ => ServiceLevel::Standard,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ServiceLevel::Standard => "standard",
            ServiceLevel::Express => "express",
            ServiceLevel::SameDay => "same-day",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceLevel::Standard => "Standard",
            ServiceLevel::Express => "Express",
            ServiceLevel::SameDay => "Same-day",
        }
    }

    pub fn base_fee(&self) -> Shillings {
        match self {
            ServiceLevel::Standard => 120,
            ServiceLevel::Express => 220,
            ServiceLevel::SameDay => 400,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageType {
    #[default]
    #[serde(rename = "parcel")]
    Parcel,
    #[serde(rename = "document")]
    Document,
    #[serde(rename = "pallet")]
    Pallet,
    #[serde(rename = "bag")]
    Bag,
}

impl PackageType {
    pub const ALL: [PackageType; 4] = [
        PackageType::Parcel,
        PackageType::Document,
        PackageType::Pallet,
        PackageType::Bag,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "document" => PackageType::Document,
            "pallet" => PackageType::Pallet,
            "bag" => PackageType::Bag,
            _ => PackageType::Parcel,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PackageType::Parcel => "parcel",
            PackageType::Document => "document",
            PackageType::Pallet => "pallet",
            PackageType::Bag => "bag",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackageType::Parcel => "Parcel",
            PackageType::Document => "Document",
            PackageType::Pallet => "Pallet / Palletized",
            PackageType::Bag => "Bag / Envelope",
        }
    }

    pub fn handling_fee(&self) -> Shillings {
        match self {
            PackageType::Pallet => PALLET_HANDLING_FEE,
            _ => STANDARD_HANDLING_FEE,
        }
    }
}

/// Nature-of-goods tags a sender can tick on the order form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NatureTag {
    Fragile,
    Perishable,
    Electronics,
    Liquid,
    Documents,
    Other,
    Hazardous,
}

impl NatureTag {
    pub const ALL: [NatureTag; 7] = [
        NatureTag::Fragile,
        NatureTag::Perishable,
        NatureTag::Electronics,
        NatureTag::Liquid,
        NatureTag::Documents,
        NatureTag::Other,
        NatureTag::Hazardous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NatureTag::Fragile => "Fragile",
            NatureTag::Perishable => "Perishable",
            NatureTag::Electronics => "Electronics",
            NatureTag::Liquid => "Liquid",
            NatureTag::Documents => "Documents",
            NatureTag::Other => "Other",
            NatureTag::Hazardous => "Hazardous",
        }
    }

    /// Flat amount added to the quote when the tag is present.
    pub fn surcharge(&self) -> Shillings {
        match self {
            NatureTag::Fragile => 50,
            NatureTag::Perishable => 120,
            NatureTag::Electronics => 40,
            NatureTag::Liquid => 120,
            _ => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(rename = "l")]
    pub length_cm: f64,
    #[serde(rename = "w")]
    pub width_cm: f64,
    #[serde(rename = "h")]
    pub height_cm: f64,
}

impl Dimensions {
    pub fn volume_cm3(&self) -> f64 {
        non_negative(self.length_cm) * non_negative(self.width_cm) * non_negative(self.height_cm)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipmentQuoteInput {
    pub weight_kg: f64,
    pub dimensions: Option<Dimensions>,
    pub zone: DeliveryZone,
    pub service: ServiceLevel,
    pub package: PackageType,
    pub nature: BTreeSet<NatureTag>,
    pub declared_value: f64,
    pub insurance: bool,
    pub cod: bool,
    pub cod_amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipmentQuote {
    pub base: Shillings,
    pub volumetric_kg: f64,
    pub billable_weight_kg: f64,
    /// Weight charge before the zone multiplier.
    pub weight_charge: Shillings,
    pub zone_multiplier: f64,
    pub weight_charge_with_zone: Shillings,
    pub fragile_surcharge: Shillings,
    pub perishable_surcharge: Shillings,
    pub electronics_surcharge: Shillings,
    pub liquid_surcharge: Shillings,
    pub insurance_fee: Shillings,
    pub cod_fee: Shillings,
    pub handling_fee: Shillings,
    pub other: Shillings,
    pub total: Shillings,
}

impl ShipmentQuote {
    pub fn nature_surcharges(&self) -> Shillings {
        self.fragile_surcharge
            + self.perishable_surcharge
            + self.electronics_surcharge
            + self.liquid_surcharge
    }

    /// Handling fee plus every nature surcharge, as shown on the "handling & extras" line.
    pub fn handling_and_extras(&self) -> Shillings {
        self.handling_fee + self.nature_surcharges() + self.other
    }
}

pub fn quote_shipment(input: &ShipmentQuoteInput) -> ShipmentQuote {
    let weight = non_negative(input.weight_kg);
    let declared_value = non_negative(input.declared_value);
    let cod_amount = non_negative(input.cod_amount);

    let base = input.service.base_fee();

    let volumetric_kg = input
        .dimensions
        .map(|dims| round_to_tenth(dims.volume_cm3() / VOLUMETRIC_DIVISOR))
        .unwrap_or(0.0);
    let billable_weight_kg = weight.max(volumetric_kg);

    let weight_charge = round_shillings(billable_weight_kg * PER_KG_RATE);
    let zone_multiplier = input.zone.multiplier();
    let weight_charge_with_zone = round_shillings(weight_charge as f64 * zone_multiplier);

    let surcharge = |tag: NatureTag| {
        if input.nature.contains(&tag) {
            tag.surcharge()
        } else {
            0
        }
    };
    let fragile_surcharge = surcharge(NatureTag::Fragile);
    let perishable_surcharge = surcharge(NatureTag::Perishable);
    let electronics_surcharge = surcharge(NatureTag::Electronics);
    let liquid_surcharge = surcharge(NatureTag::Liquid);

    let insurance_fee = if input.insurance {
        INSURANCE_MINIMUM.max(round_shillings(declared_value * INSURANCE_RATE))
    } else {
        0
    };
    let cod_fee = if input.cod {
        COD_MINIMUM.max(round_shillings(cod_amount * COD_RATE))
    } else {
        0
    };

    let handling_fee = input.package.handling_fee();
    let other = 0;

    let total = base
        + weight_charge_with_zone
        + handling_fee
        + fragile_surcharge
        + perishable_surcharge
        + electronics_surcharge
        + liquid_surcharge
        + insurance_fee
        + cod_fee
        + other;

    ShipmentQuote {
        base,
        volumetric_kg,
        billable_weight_kg,
        weight_charge,
        zone_multiplier,
        weight_charge_with_zone,
        fragile_surcharge,
        perishable_surcharge,
        electronics_surcharge,
        liquid_surcharge,
        insurance_fee,
        cod_fee,
        handling_fee,
        other,
        total,
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// Inputs are clamped non-negative, so `round` is half-up here.
fn round_shillings(value: f64) -> Shillings {
    non_negative(value).round() as Shillings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(weight_kg: f64) -> ShipmentQuoteInput {
        ShipmentQuoteInput {
            weight_kg,
            ..ShipmentQuoteInput::default()
        }
    }

    #[test]
    fn standard_city_parcel() {
        let quote = quote_shipment(&parcel(2.0));
        assert_eq!(quote.base, 120);
        assert_eq!(quote.weight_charge, 80);
        assert_eq!(quote.weight_charge_with_zone, 80);
        assert_eq!(quote.handling_fee, 60);
        assert_eq!(quote.total, 260);
    }

    #[test]
    fn international_multiplies_weight_charge_only() {
        let input = ShipmentQuoteInput {
            zone: DeliveryZone::International,
            ..parcel(2.0)
        };
        let quote = quote_shipment(&input);
        assert_eq!(quote.weight_charge_with_zone, 480);
        assert_eq!(quote.total, 660);
    }

    #[test]
    fn zero_weight_without_dimensions_bills_nothing() {
        let quote = quote_shipment(&parcel(0.0));
        assert_eq!(quote.billable_weight_kg, 0.0);
        assert_eq!(quote.weight_charge, 0);
        assert_eq!(quote.total, 180);
    }

    #[test]
    fn volumetric_weight_wins_for_bulky_parcels() {
        let input = ShipmentQuoteInput {
            dimensions: Some(Dimensions {
                length_cm: 50.0,
                width_cm: 40.0,
                height_cm: 30.0,
            }),
            ..parcel(1.0)
        };
        let quote = quote_shipment(&input);
        assert_eq!(quote.volumetric_kg, 12.0);
        assert_eq!(quote.billable_weight_kg, 12.0);
        assert_eq!(quote.weight_charge, 480);
    }

    #[test]
    fn volumetric_weight_rounds_to_one_decimal() {
        let input = ShipmentQuoteInput {
            dimensions: Some(Dimensions {
                length_cm: 11.0,
                width_cm: 13.0,
                height_cm: 17.0,
            }),
            ..parcel(0.0)
        };
        // 2431 / 5000 = 0.4862
        assert_eq!(quote_shipment(&input).volumetric_kg, 0.5);
    }

    #[test]
    fn nature_surcharges_stack() {
        let input = ShipmentQuoteInput {
            nature: NatureTag::ALL.into_iter().collect(),
            ..parcel(0.0)
        };
        let quote = quote_shipment(&input);
        assert_eq!(quote.nature_surcharges(), 50 + 120 + 40 + 120);
    }

    #[test]
    fn insurance_and_cod_have_independent_minimums() {
        let small = ShipmentQuoteInput {
            insurance: true,
            declared_value: 1_000.0,
            cod: true,
            cod_amount: 1_000.0,
            ..parcel(1.0)
        };
        let quote = quote_shipment(&small);
        assert_eq!(quote.insurance_fee, 50);
        assert_eq!(quote.cod_fee, 50);

        let large = ShipmentQuoteInput {
            declared_value: 20_000.0,
            cod_amount: 20_000.0,
            ..small
        };
        let quote = quote_shipment(&large);
        assert_eq!(quote.insurance_fee, 200);
        assert_eq!(quote.cod_fee, 400);
    }

    #[test]
    fn pallet_handling_fee() {
        let input = ShipmentQuoteInput {
            package: PackageType::Pallet,
            ..parcel(0.0)
        };
        assert_eq!(quote_shipment(&input).handling_fee, 300);
    }

    #[test]
    fn negative_and_nan_inputs_are_treated_as_zero() {
        let input = ShipmentQuoteInput {
            weight_kg: -4.0,
            declared_value: f64::NAN,
            insurance: true,
            ..parcel(0.0)
        };
        let quote = quote_shipment(&input);
        assert_eq!(quote.weight_charge, 0);
        assert_eq!(quote.insurance_fee, 50);
    }

    #[test]
    fn unknown_keys_fall_back_to_defaults() {
        assert_eq!(ServiceLevel::from_key("overnight"), ServiceLevel::Standard);
        assert_eq!(DeliveryZone::from_key("mars"), DeliveryZone::WithinCity);
        assert_eq!(PackageType::from_key(""), PackageType::Parcel);
        assert_eq!(ServiceLevel::from_key("same-day").base_fee(), 400);
    }
}
