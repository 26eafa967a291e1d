pub mod ecommerce;
pub mod home;
pub mod partner;
pub mod rides;
pub mod ship;
pub mod track;

pub use ecommerce::EcommercePage;
pub use home::HomePage;
pub use partner::PartnerPage;
pub use rides::RidesPage;
pub use ship::ShipPage;
pub use track::TrackPage;
