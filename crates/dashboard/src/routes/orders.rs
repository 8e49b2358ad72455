//! Orders tab: filtered order list and per-row status updates.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::format::dollars;
use vendor_dashboard_core::{Order, OrderId, OrderStatus, StatusFilter, Tab};

use super::layout::{Chrome, Page};
use super::render;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireVendorAuth;
use crate::models::Flash;
use crate::services::view::ViewQuery;
use crate::services::{DashboardStore, flash};
use crate::state::AppState;

/// `<option>` in a status selector.
#[derive(Debug, Clone)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Order row for tables.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: String,
    pub customer: String,
    pub date: String,
    pub amount: String,
    pub status: &'static str,
    pub badge_class: &'static str,
    pub status_options: Vec<StatusOption>,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer: order.customer.clone(),
            date: order.date.format("%Y-%m-%d").to_string(),
            amount: dollars(order.amount),
            status: order.status.as_str(),
            badge_class: order.status.badge_class(),
            status_options: OrderStatus::ALL
                .iter()
                .map(|&s| StatusOption {
                    value: s.as_str(),
                    label: s.as_str(),
                    selected: s == order.status,
                })
                .collect(),
        }
    }
}

/// Options of the status filter, `All` first.
fn filter_options(current: StatusFilter) -> Vec<StatusOption> {
    std::iter::once(StatusFilter::All)
        .chain(OrderStatus::ALL.into_iter().map(StatusFilter::Only))
        .map(|f| StatusOption {
            value: f.as_str(),
            label: match f {
                StatusFilter::All => "All",
                StatusFilter::Only(status) => status.as_str(),
            },
            selected: f == current,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "orders/index.html")]
struct OrdersTemplate {
    chrome: Chrome,
    orders: Vec<OrderRow>,
    filter_options: Vec<StatusOption>,
}

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(index))
        .route("/orders/status", post(update_status))
}

/// GET /orders
#[instrument(skip(state, session, vendor))]
async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let mut page = Page::load(&state, &session, vendor, &query).await?;

    let orders = page
        .view
        .orders(page.data())
        .into_iter()
        .map(OrderRow::from)
        .collect();

    let template = OrdersTemplate {
        filter_options: filter_options(page.view.filter_status),
        orders,
        chrome: page.chrome(Tab::Orders),
    };
    render(&template)
}

#[derive(Debug, Deserialize)]
struct StatusForm {
    order_id: String,
    status: String,
}

/// POST /orders/status
#[instrument(skip(state, session, vendor), fields(order_id = %form.order_id))]
async fn update_status(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Form(form): Form<StatusForm>,
) -> Result<Redirect, AppError> {
    let status: OrderStatus = form
        .status
        .parse()
        .map_err(|e: vendor_dashboard_core::UnknownStatus| AppError::BadRequest(e.to_string()))?;
    let id = OrderId::new(form.order_id);

    let mut store = DashboardStore::open(&session, state.api().clone(), &vendor).await?;
    match store.update_order_status(&id, status).await {
        Ok(_) => store.save(&session).await?,
        Err(e) => {
            if let Some(alert) = e.alert() {
                flash::push(&session, Flash::error(alert)).await?;
            }
        }
    }

    Ok(Redirect::to("/orders"))
}
