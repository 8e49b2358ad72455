//! Dashboard-side models.
//!
//! Backend records live in `vendor_dashboard_core`; this module only holds
//! what the dashboard keeps in the visitor session.

pub mod session;

pub use session::{CurrentVendor, Flash, FlashKind, keys as session_keys};
