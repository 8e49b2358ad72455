//! Vendor login and logout.
//!
//! The session is authenticated exactly when it holds a token. A stored
//! token is trusted as-is; the backend is only consulted at login.

use secrecy::{ExposeSecret, SecretString};
use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::VendorProfile;

use super::DashboardError;
use crate::api::VendorApiClient;
use crate::models::{CurrentVendor, session_keys};

/// Alert shown when the backend rejects a login.
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Login form input.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Sign the vendor in.
///
/// On success the token and profile are stored in a fresh session id and the
/// cached dashboard is dropped so the next page fetches anew. On failure the
/// session is left untouched.
///
/// # Errors
///
/// Returns [`DashboardError::AuthFailure`] when the backend rejects the
/// credentials or cannot be reached.
#[instrument(skip(session, api, credentials), fields(email = %credentials.email))]
pub async fn login(
    session: &Session,
    api: &VendorApiClient,
    credentials: &Credentials,
) -> Result<CurrentVendor, DashboardError> {
    let response = api
        .login(credentials.email.trim(), &credentials.password)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Vendor login rejected");
            DashboardError::AuthFailure(e)
        })?;

    session.cycle_id().await?;
    session
        .insert(session_keys::TOKEN, response.token.expose_secret())
        .await?;
    session.insert(session_keys::PROFILE, &response.user).await?;
    session.remove_value(session_keys::DASHBOARD).await?;

    tracing::info!(vendor = %response.user.email, "Vendor logged in");
    Ok(CurrentVendor {
        token: response.token,
        profile: response.user,
    })
}

/// Sign the vendor out, forgetting the token, profile and cached data.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn logout(session: &Session) -> Result<(), DashboardError> {
    for key in [
        session_keys::TOKEN,
        session_keys::PROFILE,
        session_keys::DASHBOARD,
        session_keys::VIEW,
    ] {
        session.remove_value(key).await?;
    }
    Ok(())
}

/// The signed-in vendor, if the session holds a token.
///
/// A token stored without a profile yields the fallback profile.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn current_vendor(
    session: &Session,
) -> Result<Option<CurrentVendor>, tower_sessions::session::Error> {
    let Some(token) = session.get::<String>(session_keys::TOKEN).await? else {
        return Ok(None);
    };

    let profile = session
        .get::<VendorProfile>(session_keys::PROFILE)
        .await?
        .unwrap_or_else(VendorProfile::fallback);

    Ok(Some(CurrentVendor {
        token: SecretString::from(token),
        profile,
    }))
}
