//! Settings tab: profile and notification preferences.
//!
//! Display-only; nothing here is saved.

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::Tab;

use super::layout::{Chrome, Page};
use super::render;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireVendorAuth;
use crate::services::view::ViewQuery;
use crate::state::AppState;

const DEFAULT_STORE_NAME: &str = "My Store";

const PREFERENCES: [&str; 3] = [
    "Email notifications for new orders",
    "Low stock alerts",
    "Weekly sales reports",
];

#[derive(Template)]
#[template(path = "settings/index.html")]
struct SettingsTemplate {
    chrome: Chrome,
    store_name: &'static str,
    preferences: &'static [&'static str],
}

/// Build the settings router.
pub fn router() -> Router<AppState> {
    Router::new().route("/settings", get(index))
}

/// GET /settings
#[instrument(skip(state, session, vendor))]
async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let mut page = Page::load(&state, &session, vendor, &query).await?;

    let template = SettingsTemplate {
        chrome: page.chrome(Tab::Settings),
        store_name: DEFAULT_STORE_NAME,
        preferences: &PREFERENCES,
    };
    render(&template)
}
