use std::collections::BTreeSet;

use swiftpoint::domain::{
    estimate_fulfilment, quote_shipment, DeliveryZone, Dimensions, FulfilmentEstimateInput,
    NatureTag, PackageType, PackagingTier, Plan, ServiceLevel, ShipmentQuoteInput,
};

fn parcel(weight_kg: f64, zone: DeliveryZone) -> ShipmentQuoteInput {
    ShipmentQuoteInput {
        weight_kg,
        dimensions: None,
        zone,
        service: ServiceLevel::Standard,
        package: PackageType::Parcel,
        nature: BTreeSet::new(),
        declared_value: 0.0,
        insurance: false,
        cod: false,
        cod_amount: 0.0,
    }
}

#[test]
fn two_kilo_parcel_within_city() {
    let quote = quote_shipment(&parcel(2.0, DeliveryZone::WithinCity));
    assert_eq!(quote.base, 120);
    assert_eq!(quote.weight_charge_with_zone, 80);
    assert_eq!(quote.handling_fee, 60);
    assert_eq!(quote.total, 260);
}

#[test]
fn international_multiplies_weight_charge_only() {
    let quote = quote_shipment(&parcel(2.0, DeliveryZone::International));
    assert_eq!(quote.weight_charge, 80);
    assert_eq!(quote.weight_charge_with_zone, 480);
    assert_eq!(quote.total, 660);
}

#[test]
fn bulky_parcel_bills_volumetric_weight() {
    let input = ShipmentQuoteInput {
        dimensions: Some(Dimensions {
            length_cm: 50.0,
            width_cm: 40.0,
            height_cm: 30.0,
        }),
        ..parcel(1.0, DeliveryZone::WithinCity)
    };
    let quote = quote_shipment(&input);
    assert_eq!(quote.volumetric_kg, 12.0);
    assert_eq!(quote.billable_weight_kg, 12.0);
    assert_eq!(quote.total, 120 + 480 + 60);
}

#[test]
fn extras_stack_on_top_of_base() {
    let input = ShipmentQuoteInput {
        service: ServiceLevel::Express,
        package: PackageType::Pallet,
        nature: [NatureTag::Fragile, NatureTag::Perishable].into_iter().collect(),
        declared_value: 10_000.0,
        insurance: true,
        cod: true,
        cod_amount: 5_000.0,
        ..parcel(0.0, DeliveryZone::WithinCity)
    };
    let quote = quote_shipment(&input);
    assert_eq!(quote.insurance_fee, 100);
    assert_eq!(quote.cod_fee, 100);
    assert_eq!(quote.handling_and_extras(), 300 + 50 + 120);
    assert_eq!(quote.total, 220 + 300 + 50 + 120 + 100 + 100);
}

#[test]
fn total_never_drops_below_base() {
    for zone in DeliveryZone::ALL {
        for service in ServiceLevel::ALL {
            let input = ShipmentQuoteInput {
                service,
                ..parcel(-3.0, zone)
            };
            let quote = quote_shipment(&input);
            assert!(quote.total >= quote.base);
            assert_eq!(quote.weight_charge, 0);
        }
    }
}

#[test]
fn same_quote_input_gives_same_quote() {
    let input = ShipmentQuoteInput {
        service: ServiceLevel::Express,
        nature: [NatureTag::Fragile, NatureTag::Electronics].into_iter().collect(),
        declared_value: 18_500.0,
        insurance: true,
        cod: true,
        cod_amount: 3_200.0,
        dimensions: Some(Dimensions {
            length_cm: 35.0,
            width_cm: 25.0,
            height_cm: 20.0,
        }),
        ..parcel(3.3, DeliveryZone::Intercity)
    };

    let first = quote_shipment(&input);
    let second = quote_shipment(&input);
    assert_eq!(first, second);
    assert!(first.zone_multiplier > 1.0);
    assert!(first.insurance_fee > 0 && first.cod_fee > 0);
}

fn volume(orders: u32, average_weight_kg: f64, plan: Plan) -> FulfilmentEstimateInput {
    FulfilmentEstimateInput {
        orders,
        average_weight_kg,
        plan,
        ..FulfilmentEstimateInput::default()
    }
}

#[test]
fn payg_hundred_orders() {
    let estimate = estimate_fulfilment(&volume(100, 2.0, Plan::Payg));
    assert_eq!(estimate.delivery_per_order, 250.0);
    assert_eq!(estimate.delivery_cost, 25_000.0);
    assert_eq!(estimate.plan_total, estimate.payg_total);
    assert_eq!(estimate.savings, 0.0);
}

#[test]
fn small_merchant_loses_money_on_starter() {
    let estimate = estimate_fulfilment(&volume(100, 2.0, Plan::Starter));
    assert_eq!(estimate.payg_total, 25_000.0);
    assert_eq!(estimate.plan_total, 30_000.0);
    assert_eq!(estimate.savings, -5_000.0);
}

#[test]
fn growth_plan_discounts_addons_and_charges_extra_orders() {
    let input = FulfilmentEstimateInput {
        packaging: PackagingTier::Branded,
        ..volume(1_000, 1.0, Plan::Growth)
    };
    let estimate = estimate_fulfilment(&input);
    assert_eq!(estimate.payg_total, 250_000.0);
    assert_eq!(estimate.plan_total, 60_000.0 + 400.0 * 90.0 + 50_000.0 * 0.85);
    assert_eq!(estimate.savings, 111_500.0);
}

#[test]
fn same_estimator_input_gives_same_estimate() {
    let input = FulfilmentEstimateInput {
        cod: true,
        packaging: PackagingTier::Branded,
        storage_months: 3.0,
        storage_volume_m3: 2.5,
        insurance: true,
        express: true,
        ..volume(750, 1.8, Plan::Growth)
    };

    let first = estimate_fulfilment(&input);
    let second = estimate_fulfilment(&input);
    assert_eq!(first, second);
    assert!(first.addons_cost > 0.0);
    assert_ne!(first.plan_total, first.payg_total);
}
