//! Overview tab: summary cards, charts, recent orders and top products.

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use rust_decimal::Decimal;
use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::chart::{self, ChartConfig, ChartKind};
use vendor_dashboard_core::format::group_thousands;
use vendor_dashboard_core::{Product, SummaryMetrics, Tab};

use super::layout::{Chrome, Page};
use super::orders::OrderRow;
use super::{chart_json, render};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireVendorAuth;
use crate::services::view::ViewQuery;
use crate::state::AppState;

/// Rows shown in the recent orders and top products lists.
const PREVIEW_ROWS: usize = 5;

/// Stock level that fills the stock bar.
const FULL_STOCK: i64 = 200;

/// Summary card.
#[derive(Debug, Clone)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub trend: &'static str,
    pub positive: bool,
}

fn summary_cards(summary: &SummaryMetrics) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            title: "Total Sales",
            value: format!("${}", group_thousands(summary.total_sales)),
            trend: "+12.5% from last month",
            positive: true,
        },
        SummaryCard {
            title: "Total Orders",
            value: summary.total_orders.to_string(),
            trend: "+8.3% from last month",
            positive: true,
        },
        SummaryCard {
            title: "Total Products",
            value: summary.total_products.to_string(),
            trend: "No change",
            positive: false,
        },
        SummaryCard {
            title: "New Customers",
            value: summary.new_customers.to_string(),
            trend: "+15.7% from last month",
            positive: true,
        },
    ]
}

/// Top product with its stock bar.
#[derive(Debug, Clone)]
pub struct TopProductRow {
    pub name: String,
    pub sales: i64,
    pub stock: i64,
    pub stock_percent: String,
}

impl From<&Product> for TopProductRow {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sales: product.sales,
            stock: product.stock,
            stock_percent: stock_percent(product.stock).to_string(),
        }
    }
}

/// Stock bar width, `stock / 200` as a percentage clamped to `0..=100`.
fn stock_percent(stock: i64) -> Decimal {
    let percent = Decimal::from(stock.clamp(0, FULL_STOCK)) * Decimal::ONE_HUNDRED
        / Decimal::from(FULL_STOCK);
    percent.normalize()
}

#[derive(Template)]
#[template(path = "overview.html")]
struct OverviewTemplate {
    chrome: Chrome,
    cards: Vec<SummaryCard>,
    recent_orders: Vec<OrderRow>,
    top_products: Vec<TopProductRow>,
    sales_chart: String,
    customer_chart: String,
}

/// Build the overview router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET /
#[instrument(skip(state, session, vendor))]
async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let mut page = Page::load(&state, &session, vendor, &query).await?;
    let data = page.data();

    let cards = summary_cards(&data.summary);
    let recent_orders = data
        .recent_orders
        .iter()
        .take(PREVIEW_ROWS)
        .map(OrderRow::from)
        .collect();
    let top_products = data
        .top_products
        .iter()
        .take(PREVIEW_ROWS)
        .map(TopProductRow::from)
        .collect();

    let template = OverviewTemplate {
        cards,
        recent_orders,
        top_products,
        sales_chart: chart_json(&ChartConfig::new(ChartKind::Line, chart::sales_trend()))?,
        customer_chart: chart_json(&ChartConfig::new(
            ChartKind::Pie,
            chart::customer_distribution(),
        ))?,
        chrome: page.chrome(Tab::Overview),
    };
    render(&template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sales_card_groups_thousands() {
        let cards = summary_cards(&SummaryMetrics {
            total_sales: Decimal::new(12540, 0),
            total_orders: 289,
            total_products: 42,
            new_customers: 56,
        });
        assert_eq!(cards[0].value, "$12,540");
        assert_eq!(cards[1].value, "289");
        assert!(!cards[2].positive);
    }

    #[test]
    fn test_stock_percent() {
        assert_eq!(stock_percent(56).to_string(), "28");
        assert_eq!(stock_percent(23).to_string(), "11.5");
        assert_eq!(stock_percent(256).to_string(), "100");
        assert_eq!(stock_percent(200).to_string(), "100");
        assert_eq!(stock_percent(-4).to_string(), "0");
    }
}
