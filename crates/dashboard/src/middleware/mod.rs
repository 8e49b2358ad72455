//! HTTP middleware and extractors.
//!
//! - `session` - tower-sessions layer (in-memory store)
//! - `auth` - Extractors gating routes on a stored vendor token

pub mod auth;
pub mod session;

pub use auth::{OptionalVendorAuth, RequireVendorAuth, VendorAuthRejection};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
