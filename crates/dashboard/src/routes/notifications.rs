//! Notification and refresh actions posted from the header.

use axum::{
    Form, Router,
    extract::{Path, State},
    response::Redirect,
    routing::post,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::NotificationId;

use crate::error::AppError;
use crate::middleware::RequireVendorAuth;
use crate::services::DashboardStore;
use crate::state::AppState;

/// Page to return to after the action.
#[derive(Debug, Default, Deserialize)]
struct ReturnForm {
    return_to: Option<String>,
}

impl ReturnForm {
    /// Local path to redirect to. Anything else falls back to `/`.
    fn target(&self) -> &str {
        self.return_to
            .as_deref()
            .filter(|path| path.starts_with('/') && !path.starts_with("//"))
            .unwrap_or("/")
    }
}

/// Build the notifications router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notifications/{id}/read", post(mark_read))
        .route("/refresh", post(refresh))
}

/// POST /notifications/{id}/read
#[instrument(skip(state, session, vendor))]
async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Path(id): Path<NotificationId>,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect, AppError> {
    let mut store = DashboardStore::open(&session, state.api().clone(), &vendor).await?;
    if store.mark_notification_read(id) {
        store.save(&session).await?;
    }
    Ok(Redirect::to(form.target()))
}

/// POST /refresh
///
/// A failed refresh keeps the current data; the failure is only logged.
#[instrument(skip(state, session, vendor))]
async fn refresh(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect, AppError> {
    let mut store = DashboardStore::open(&session, state.api().clone(), &vendor).await?;
    if store.refresh().await.is_ok() {
        tracing::info!("Dashboard refreshed on request");
    }
    store.save(&session).await?;
    Ok(Redirect::to(form.target()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(return_to: Option<&str>) -> String {
        ReturnForm {
            return_to: return_to.map(str::to_string),
        }
        .target()
        .to_string()
    }

    #[test]
    fn test_return_target_stays_local() {
        assert_eq!(target(Some("/orders")), "/orders");
        assert_eq!(target(None), "/");
        assert_eq!(target(Some("https://evil.example.com")), "/");
        assert_eq!(target(Some("//evil.example.com")), "/");
    }
}
