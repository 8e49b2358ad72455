//! Dashboard operation errors.

use std::fmt;

use thiserror::Error;
use vendor_dashboard_core::DraftError;

use crate::api::ApiError;

/// Store mutations that talk to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    UpdateOrderStatus,
    AddProduct,
    UpdateProduct,
}

impl Mutation {
    /// Alert shown to the vendor when the mutation fails.
    #[must_use]
    pub const fn failure_alert(self) -> &'static str {
        match self {
            Self::UpdateOrderStatus => "Failed to update order status.",
            Self::AddProduct => "Failed to add product.",
            Self::UpdateProduct => "Failed to update product.",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UpdateOrderStatus => "order status update",
            Self::AddProduct => "add product",
            Self::UpdateProduct => "update product",
        })
    }
}

/// Errors raised by session and store operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Backend rejected the login.
    #[error("Login failed: {0}")]
    AuthFailure(#[source] ApiError),

    /// Refresh could not fetch everything.
    #[error("Dashboard refresh failed: {0}")]
    FetchFailure(#[source] ApiError),

    /// Backend did not acknowledge a mutation.
    #[error("{mutation} failed: {source}")]
    MutationFailure {
        mutation: Mutation,
        #[source]
        source: ApiError,
    },

    /// Product form input did not parse.
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] DraftError),

    /// Session store failure.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl DashboardError {
    /// Message shown in the alert banner, if this error is user-visible.
    ///
    /// Refresh and session failures are only logged.
    #[must_use]
    pub fn alert(&self) -> Option<String> {
        match self {
            Self::AuthFailure(_) => Some(crate::services::auth::LOGIN_FAILED.to_string()),
            Self::MutationFailure { mutation, .. } => Some(mutation.failure_alert().to_string()),
            Self::InvalidProduct(e) => Some(format!("Invalid product: {e}.")),
            Self::FetchFailure(_) | Self::Session(_) => None,
        }
    }
}
