//! SwiftPoint Logistics: courier booking, e-commerce fulfilment estimates and
//! ride booking for the Kenyan market, as a Dioxus app.

pub mod app;
pub mod config;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod util;
