use std::{ops::Deref, rc::Rc};

use dioxus::{prelude::*, signals::Signal};

use crate::{
    config::AppConfig,
    domain::AppState,
    infra::{FileStore, KeyValueStore, MemoryStore},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{EcommercePage, HomePage, PartnerPage, RidesPage, ShipPage, TrackPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{clear_ride_draft, load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/logistics/order")]
    Ship {},
    #[route("/logistics/track")]
    Track {},
    #[route("/ecommerce")]
    Ecommerce {},
    #[route("/ecommerce/partner")]
    Partner {},
    #[route("/rides")]
    Rides {},
}

/// Handle to the local key-value store shared through context.
#[derive(Clone)]
pub struct LocalStore(Rc<dyn KeyValueStore>);

impl LocalStore {
    pub fn open(config: &AppConfig) -> Self {
        match &config.data_dir {
            Some(dir) => {
                let store = FileStore::new(dir.clone());
                tracing::info!(dir = %store.root().display(), "using file-backed local storage");
                Self(Rc::new(store))
            }
            None => {
                tracing::warn!("no data directory available; state will not survive a restart");
                Self(Rc::new(MemoryStore::new()))
            }
        }
    }
}

impl Deref for LocalStore {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    let store = use_signal(|| LocalStore::open(&config));

    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            let saved = load_persisted_state(&**store.read());
            state.with_mut(|st| st.apply_persisted(saved));
        }
    });
    use_context_provider(|| state);
    use_context_provider(|| store);
    use_context_provider(|| config.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::logo_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the order list and ride draft. Storage failures are logged and
/// otherwise ignored; the in-memory state stays authoritative.
pub fn persist_user_state(store: Signal<LocalStore>, state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&**store.read(), &snapshot) {
        tracing::warn!(error = %err, "failed to persist user state");
    }
}

pub fn forget_ride_draft(store: Signal<LocalStore>) {
    if let Err(err) = clear_ride_draft(&**store.read()) {
        tracing::warn!(error = %err, "failed to clear ride draft");
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Ship() -> Element {
    rsx! { Shell { ShipPage {} } }
}

#[component]
pub fn Track() -> Element {
    rsx! { Shell { TrackPage {} } }
}

#[component]
pub fn Ecommerce() -> Element {
    rsx! { Shell { EcommercePage {} } }
}

#[component]
pub fn Partner() -> Element {
    rsx! { Shell { PartnerPage {} } }
}

#[component]
pub fn Rides() -> Element {
    rsx! { Shell { RidesPage {} } }
}
