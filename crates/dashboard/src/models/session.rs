//! Session-related types for vendor authentication and page alerts.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use vendor_dashboard_core::VendorProfile;

/// The signed-in vendor, rebuilt from the session on every request.
#[derive(Debug, Clone)]
pub struct CurrentVendor {
    /// Bearer token issued by the backend at login.
    pub token: SecretString,
    /// Profile returned at login, or the fallback profile.
    pub profile: VendorProfile,
}

/// Severity of a [`Flash`] alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS modifier class used by the alert banner.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// One-shot alert shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Session keys for vendor state.
pub mod keys {
    /// Bearer token of the signed-in vendor.
    pub const TOKEN: &str = "vendor_token";

    /// Profile of the signed-in vendor.
    pub const PROFILE: &str = "vendor_profile";

    /// Cached dashboard store.
    pub const DASHBOARD: &str = "dashboard";

    /// Search query and status filter.
    pub const VIEW: &str = "view";

    /// Pending alert for the next page.
    pub const FLASH: &str = "flash";
}
