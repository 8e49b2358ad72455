//! Business logic layer between routes and the vendor API.
//!
//! - `auth` - Login, logout and the current vendor
//! - `store` - Dashboard data store: refresh and mutations
//! - `view` - Search/filter state kept across tabs
//! - `flash` - One-shot alerts

pub mod auth;
mod error;
pub mod flash;
pub mod store;
pub mod view;

pub use error::{DashboardError, Mutation};
pub use store::DashboardStore;
