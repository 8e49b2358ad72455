//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Health check
//!
//! # Auth
//! GET  /auth/login                  - Login page
//! POST /auth/login                  - Email/password login
//! POST /auth/logout                 - Logout
//!
//! # Tabs (all accept ?q= and ?status= to change the search/filter)
//! GET  /                            - Overview
//! GET  /products                    - Products (?adding=1, ?edit={id})
//! GET  /orders                      - Orders
//! GET  /customers                   - Customers
//! GET  /analytics                   - Analytics
//! GET  /settings                    - Settings
//!
//! # Mutations
//! POST /products                    - Add product
//! POST /products/{id}               - Update product
//! POST /orders/status               - Update order status
//! POST /notifications/{id}/read     - Mark notification read
//! POST /refresh                     - Refetch dashboard data
//!
//! # Built-in backend (only without VENDOR_API_URL)
//! *    /api/...                     - Mock vendor API
//! ```

pub mod analytics;
pub mod auth;
pub mod customers;
pub mod layout;
pub mod notifications;
pub mod orders;
pub mod overview;
pub mod products;
pub mod settings;

use askama::Template;
use axum::{Router, response::Html};
use vendor_dashboard_core::chart::ChartConfig;

use crate::error::AppError;
use crate::state::AppState;

/// Build the dashboard router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(overview::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(customers::router())
        .merge(analytics::router())
        .merge(settings::router())
        .merge(notifications::router())
}

/// Render a template into an HTML response body.
pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "Template render failed");
        AppError::Template(e)
    })
}

/// Serialize a chart for a `data-chart` attribute.
pub(crate) fn chart_json(chart: &ChartConfig) -> Result<String, AppError> {
    chart
        .to_json()
        .map_err(|e| AppError::Internal(format!("Chart serialization failed: {e}")))
}
