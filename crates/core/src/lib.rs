//! Vendor Dashboard Core - Domain model and pure client-state logic.
//!
//! This crate holds everything the dashboard derives without touching the
//! network:
//! - `types` - Newtype IDs, emails and order statuses
//! - `models` - Records exchanged with the vendor backend
//! - `store` - In-memory dashboard state and its local mutations
//! - `view` - Tabs, search/status filtering and derived listings
//! - `chart` - Projection of domain data into Chart.js input
//! - `format` - Locale-style number grouping for display
//!
//! # Architecture
//!
//! No I/O, no HTTP clients, no sessions. The `vendor-dashboard` crate owns
//! those and feeds this crate plain data.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chart;
pub mod format;
pub mod models;
pub mod store;
pub mod types;
pub mod view;

pub use models::*;
pub use store::{DashboardData, DashboardState, LoadPhase};
pub use types::*;
pub use view::{Tab, ViewState};
