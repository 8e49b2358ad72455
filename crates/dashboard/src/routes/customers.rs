//! Customers tab: customers derived from the recent orders.

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::format::dollars;
use vendor_dashboard_core::view::{CustomerSummary, customer_summaries, filter_orders};
use vendor_dashboard_core::{StatusFilter, Tab};

use super::layout::{Chrome, Page};
use super::render;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireVendorAuth;
use crate::services::view::ViewQuery;
use crate::state::AppState;

/// Customer row for the table.
#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub name: String,
    pub order_count: usize,
    pub total_spent: String,
    pub last_order: String,
}

impl From<CustomerSummary> for CustomerRow {
    fn from(summary: CustomerSummary) -> Self {
        Self {
            name: summary.name,
            order_count: summary.order_count,
            total_spent: dollars(summary.total_spent),
            last_order: summary.last_order.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "customers/index.html")]
struct CustomersTemplate {
    chrome: Chrome,
    customers: Vec<CustomerRow>,
}

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new().route("/customers", get(index))
}

/// GET /customers
///
/// Honours the search query but not the order status filter.
#[instrument(skip(state, session, vendor))]
async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let mut page = Page::load(&state, &session, vendor, &query).await?;

    let orders = filter_orders(
        &page.data().recent_orders,
        &page.view.search_query,
        StatusFilter::All,
    );
    let customers = customer_summaries(&orders)
        .into_iter()
        .map(CustomerRow::from)
        .collect();

    let template = CustomersTemplate {
        customers,
        chrome: page.chrome(Tab::Customers),
    };
    render(&template)
}
