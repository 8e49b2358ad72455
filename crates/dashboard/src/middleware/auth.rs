//! Authentication extractors.
//!
//! A session is authenticated when it holds a vendor token; see
//! [`crate::services::auth::current_vendor`].

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::CurrentVendor;
use crate::services::auth::current_vendor;

/// Extractor that requires a signed-in vendor.
///
/// Unauthenticated requests are redirected to the login page, or get
/// 401 Unauthorized for `/api/` paths.
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireVendorAuth(vendor): RequireVendorAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", vendor.profile.name)
/// }
/// ```
pub struct RequireVendorAuth(pub CurrentVendor);

/// Rejection for [`RequireVendorAuth`].
#[derive(Debug)]
pub enum VendorAuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
    /// The session layer is missing or the session store failed.
    SessionUnavailable,
}

impl IntoResponse for VendorAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::SessionUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Session unavailable").into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for RequireVendorAuth
where
    S: Send + Sync,
{
    type Rejection = VendorAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(VendorAuthRejection::SessionUnavailable)?;

        let vendor = current_vendor(session).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read vendor session");
            VendorAuthRejection::SessionUnavailable
        })?;

        vendor.map(Self).ok_or_else(|| {
            if parts.uri.path().starts_with("/api/") {
                VendorAuthRejection::Unauthorized
            } else {
                VendorAuthRejection::RedirectToLogin
            }
        })
    }
}

/// Extractor that optionally gets the signed-in vendor.
pub struct OptionalVendorAuth(pub Option<CurrentVendor>);

impl<S> FromRequestParts<S> for OptionalVendorAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let vendor = match parts.extensions.get::<Session>() {
            Some(session) => current_vendor(session).await.ok().flatten(),
            None => None,
        };

        Ok(Self(vendor))
    }
}
