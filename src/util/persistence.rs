use crate::{
    domain::{app_state::PersistedState, RideDraft, ShipmentOrder},
    infra::{load_json, save_json, KeyValueStore, StorageError},
};

pub const ORDERS_KEY: &str = "sp_orders_v1";
pub const RIDE_DRAFT_KEY: &str = "rideDraft";

pub fn load_orders(store: &dyn KeyValueStore) -> Vec<ShipmentOrder> {
    load_json(store, ORDERS_KEY).unwrap_or_default()
}

pub fn save_orders(store: &dyn KeyValueStore, orders: &[ShipmentOrder]) -> Result<(), StorageError> {
    save_json(store, ORDERS_KEY, &orders)
}

pub fn load_ride_draft(store: &dyn KeyValueStore) -> Option<RideDraft> {
    load_json(store, RIDE_DRAFT_KEY)
}

pub fn save_ride_draft(store: &dyn KeyValueStore, draft: &RideDraft) -> Result<(), StorageError> {
    save_json(store, RIDE_DRAFT_KEY, draft)
}

pub fn clear_ride_draft(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(RIDE_DRAFT_KEY)
}

/// Read once at mount.
pub fn load_persisted_state(store: &dyn KeyValueStore) -> PersistedState {
    let state = PersistedState {
        orders: load_orders(store),
        ride_draft: load_ride_draft(store),
    };
    tracing::info!(
        orders = state.orders.len(),
        ride_draft = state.ride_draft.is_some(),
        "loaded local state"
    );
    state
}

pub fn save_persisted_state(
    store: &dyn KeyValueStore,
    state: &PersistedState,
) -> Result<(), StorageError> {
    save_orders(store, &state.orders)?;
    if let Some(draft) = &state.ride_draft {
        save_ride_draft(store, draft)?;
    }
    Ok(())
}
