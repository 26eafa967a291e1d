use serde::{Deserialize, Serialize};

use super::{
    fulfilment::EstimatorDraft,
    order::{OrderDraft, ShipmentOrder, RECENT_ORDERS},
    rides::{RideAction, RideDraft},
};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Placed bookings, newest first.
    pub orders: Vec<ShipmentOrder>,
    /// Booking shown in the order summary panel after a submission.
    pub last_order: Option<ShipmentOrder>,
    pub order_draft: OrderDraft,
    pub estimator: EstimatorDraft,
    pub ride_draft: RideDraft,
    /// Whether the ride form should be kept as an autofill cache. Cleared by
    /// a booking request, set again by the next edit.
    pub ride_draft_cached: bool,
    /// Generated once per session, on first request.
    pub referral_code: Option<String>,
}

impl AppState {
    pub fn record_order(&mut self, order: ShipmentOrder) {
        self.orders.insert(0, order.clone());
        self.last_order = Some(order);
    }

    pub fn recent_orders(&self) -> &[ShipmentOrder] {
        &self.orders[..self.orders.len().min(RECENT_ORDERS)]
    }

    pub fn update_ride(&mut self, action: RideAction) {
        self.ride_draft = std::mem::take(&mut self.ride_draft).apply(action);
        self.ride_draft_cached = true;
    }

    /// The form keeps its values; only the stored cache goes away.
    pub fn ride_booked(&mut self) {
        self.ride_draft_cached = false;
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.orders = persisted.orders;
        if let Some(draft) = persisted.ride_draft {
            self.ride_draft = draft;
            self.ride_draft_cached = true;
        }
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            orders: self.orders.clone(),
            ride_draft: self.ride_draft_cached.then(|| self.ride_draft.clone()),
        }
    }
}

/// What survives a restart: the order list and the ride autofill draft.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub orders: Vec<ShipmentOrder>,
    #[serde(default)]
    pub ride_draft: Option<RideDraft>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{place_order, OrderAction};

    fn order(id: &str) -> ShipmentOrder {
        let draft = [
            OrderAction::SetSenderName("A".into()),
            OrderAction::SetSenderPhone("1".into()),
            OrderAction::SetRecipientName("B".into()),
            OrderAction::SetRecipientPhone("2".into()),
            OrderAction::SetPickupAddress("X".into()),
            OrderAction::SetDropoffAddress("Y".into()),
            OrderAction::SetTermsAccepted(true),
        ]
        .into_iter()
        .fold(OrderDraft::default(), OrderDraft::apply);
        place_order(draft, id.to_string(), "2025-01-01T00:00:00Z".into())
            .unwrap()
            .0
    }

    #[test]
    fn newest_order_first_and_recent_capped() {
        let mut state = AppState::default();
        for n in 0..8 {
            state.record_order(order(&format!("SP10000{n}")));
        }
        assert_eq!(state.orders.len(), 8);
        assert_eq!(state.orders[0].tracking_id, "SP100007");
        assert_eq!(state.recent_orders().len(), RECENT_ORDERS);
        assert_eq!(
            state.last_order.as_ref().map(|o| o.tracking_id.as_str()),
            Some("SP100007")
        );
    }

    #[test]
    fn persisted_round_trip_keeps_orders() {
        let mut state = AppState::default();
        state.record_order(order("SP200000"));
        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored.orders, state.orders);
        assert!(restored.last_order.is_none());
    }

    #[test]
    fn booking_drops_the_ride_cache_but_keeps_the_form() {
        let mut state = AppState::default();
        assert_eq!(state.to_persisted().ride_draft, None);

        state.update_ride(RideAction::SetPickup("Upper Hill".into()));
        state.update_ride(RideAction::SetDestination("Gigiri".into()));
        assert_eq!(
            state.to_persisted().ride_draft.map(|d| d.pickup),
            Some("Upper Hill".to_string())
        );

        state.ride_booked();
        state.record_order(order("SP300000"));
        let snapshot = state.to_persisted();
        assert_eq!(snapshot.ride_draft, None);
        assert_eq!(snapshot.orders.len(), 1);
        assert_eq!(state.ride_draft.destination, "Gigiri");

        state.update_ride(RideAction::SetDestination("Runda".into()));
        assert!(state.to_persisted().ride_draft.is_some());
    }
}
