//! Analytics tab: sales trend, product performance and customer split.

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
use vendor_dashboard_core::chart::{self, ChartConfig, ChartKind};

use super::layout::{Chrome, Page};
use super::{chart_json, render};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireVendorAuth;
use crate::services::view::ViewQuery;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "analytics/index.html")]
struct AnalyticsTemplate {
    chrome: Chrome,
    sales_chart: String,
    product_chart: String,
    customer_chart: String,
}

/// Build the analytics router.
pub fn router() -> Router<AppState> {
    Router::new().route("/analytics", get(index))
}

/// GET /analytics
#[instrument(skip(state, session, vendor))]
async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let mut page = Page::load(&state, &session, vendor, &query).await?;

    let product_chart = chart_json(&ChartConfig::new(
        ChartKind::Bar,
        chart::product_performance(&page.data().top_products),
    ))?;

    let template = AnalyticsTemplate {
        sales_chart: chart_json(&ChartConfig::new(ChartKind::Line, chart::sales_trend()))?,
        product_chart,
        customer_chart: chart_json(&ChartConfig::new(
            ChartKind::Pie,
            chart::customer_distribution(),
        ))?,
        chrome: page.chrome(Tab::Analytics),
    };
    render(&template)
}
