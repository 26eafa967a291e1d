//! Pricing rules, form state and the records they produce.

pub mod app_state;
pub mod fulfilment;
pub mod order;
pub mod partner;
pub mod rides;
pub mod shipment;
pub mod tracking;

pub use app_state::{AppState, PersistedState};
pub use fulfilment::{
    estimate_fulfilment, EstimatorAction, EstimatorDraft, FulfilmentEstimate,
    FulfilmentEstimateInput, PackagingTier, Plan, PlanTerms,
};
pub use order::{
    place_order, CostBreakdown, OrderAction, OrderDraft, ShipmentOrder, SubmissionError,
};
pub use partner::{InquiryError, PartnerInquiry};
pub use rides::{estimate_fare, Car, FareEstimate, RideAction, RideDraft};
pub use shipment::{
    quote_shipment, DeliveryZone, Dimensions, NatureTag, PackageType, ServiceLevel, Shillings,
    ShipmentQuote, ShipmentQuoteInput,
};
pub use tracking::{lookup_tracking, TrackingStatus};
