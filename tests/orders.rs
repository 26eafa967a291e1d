use std::fs;

use rand::{rngs::StdRng, SeedableRng};
use swiftpoint::{
    domain::{
        place_order, AppState, EstimatorAction, EstimatorDraft, OrderAction, OrderDraft, Plan,
        ShipmentOrder, SubmissionError,
    },
    util::{
        codes::tracking_id,
        export::{audit_filename, audit_report, order_filename, order_json, write_export},
    },
};
use tempfile::tempdir;
use time::macros::datetime;

fn filled_form() -> OrderDraft {
    [
        OrderAction::SetSenderName("Njeri".into()),
        OrderAction::SetSenderPhone("0711222333".into()),
        OrderAction::SetRecipientName("Otieno".into()),
        OrderAction::SetRecipientPhone("0722333444".into()),
        OrderAction::SetPickupAddress("Kimathi Street".into()),
        OrderAction::SetDropoffAddress("Milimani, Kisumu".into()),
        OrderAction::SetWeight("2".into()),
        OrderAction::SetTermsAccepted(true),
    ]
    .into_iter()
    .fold(OrderDraft::default(), OrderDraft::apply)
}

fn submit(state: &mut AppState, rng: &mut StdRng) -> Result<ShipmentOrder, SubmissionError> {
    let draft = std::mem::take(&mut state.order_draft);
    let (order, next) = place_order(draft, tracking_id(rng), "2024-06-01T10:00:00+03:00".into())?;
    state.record_order(order.clone());
    state.order_draft = next;
    Ok(order)
}

#[test]
fn submission_records_order_and_keeps_sender() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = AppState {
        order_draft: filled_form(),
        ..AppState::default()
    };

    let order = submit(&mut state, &mut rng).expect("order placed");

    assert!(order.tracking_id.starts_with("SP"));
    assert_eq!(order.tracking_id.len(), 8);
    assert_eq!(order.status, "Pending pickup");
    assert_eq!(order.cost_breakdown.total, 260);
    assert_eq!(state.orders.len(), 1);
    assert_eq!(state.last_order.as_ref(), Some(&order));

    assert_eq!(state.order_draft.sender_name, "Njeri");
    assert_eq!(state.order_draft.sender_phone, "0711222333");
    assert!(state.order_draft.recipient_name.is_empty());
    assert!(!state.order_draft.terms_accepted);
}

#[test]
fn rejected_submission_leaves_state_untouched() {
    let mut rng = StdRng::seed_from_u64(1);
    let state = AppState {
        order_draft: filled_form().apply(OrderAction::SetTermsAccepted(false)),
        ..AppState::default()
    };
    let before = state.order_draft.clone();

    let draft = state.order_draft.clone();
    let result = place_order(draft, tracking_id(&mut rng), "2024-06-01T10:00:00Z".into());

    assert_eq!(result, Err(SubmissionError::TermsNotAccepted));
    assert!(state.orders.is_empty());
    assert_eq!(state.order_draft, before);
}

#[test]
fn recent_panel_shows_newest_six() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = AppState::default();
    let mut placed = Vec::new();
    for _ in 0..8 {
        state.order_draft = filled_form();
        placed.push(submit(&mut state, &mut rng).expect("order placed").tracking_id);
    }

    let recent: Vec<_> = state
        .recent_orders()
        .iter()
        .map(|order| order.tracking_id.clone())
        .collect();
    assert_eq!(recent.len(), 6);
    assert_eq!(recent[0], placed[7]);
    assert_eq!(state.orders.len(), 8);
}

#[test]
fn order_export_is_pretty_camel_case_json() {
    let dir = tempdir().expect("tempdir");
    let (order, _) = place_order(filled_form(), "SP777001".into(), "2024-06-01T10:00:00Z".into())
        .expect("order placed");

    let json = order_json(&order).expect("encode");
    let path = write_export(dir.path(), &order_filename(&order), &json).expect("write");

    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("SP777001.json"));
    let written = fs::read_to_string(path).expect("read back");
    assert!(written.contains("\"trackingId\": \"SP777001\""));
    assert!(written.contains("\"costBreakdown\""));
}

#[test]
fn audit_report_for_a_losing_plan() {
    let draft = EstimatorDraft::default().apply(EstimatorAction::SelectPlan(Plan::Starter));
    let at = datetime!(2024-06-01 10:00 UTC);

    let report = audit_report(&draft.input(), &draft.estimate(), at);

    assert_eq!(audit_filename(at), "swiftpoint-audit-20240601.txt");
    assert!(report.contains("Monthly Orders: 100"));
    assert!(report.contains("Selected Plan: starter"));
    assert!(report.contains("Potential savings if using selected plan: -5000.00"));
    assert!(report.contains("not cheaper than pay-as-you-go"));
}
