//! Request and response bodies specific to the vendor API.
//!
//! Domain records (orders, products, ...) come from `vendor_dashboard_core`;
//! only the envelopes that exist purely on the wire live here.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use vendor_dashboard_core::{OrderStatus, VendorProfile};

/// `POST /api/auth/login` body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login: the bearer token and the vendor's profile.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: SecretString,
    pub user: VendorProfile,
}

/// `PATCH /api/orders/{id}` body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}
