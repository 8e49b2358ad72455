//! Tab selection, search and status filtering.
//!
//! Everything here is a pure function of the store contents and the
//! [`ViewState`]; derived lists are recomputed on every render and keep the
//! store's insertion order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Order, Product};
use crate::store::DashboardData;
use crate::types::StatusFilter;

/// Dashboard tabs. Exactly one is active per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Overview,
    Products,
    Orders,
    Customers,
    Analytics,
    Settings,
}

impl Tab {
    /// Sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Products,
        Self::Orders,
        Self::Customers,
        Self::Analytics,
        Self::Settings,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Products => "/products",
            Self::Orders => "/orders",
            Self::Customers => "/customers",
            Self::Analytics => "/analytics",
            Self::Settings => "/settings",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Customers => "Customers",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Overview => "📊",
            Self::Products => "📦",
            Self::Orders => "🛒",
            Self::Customers => "👥",
            Self::Analytics => "📈",
            Self::Settings => "⚙️",
        }
    }
}

/// Search query and status filter, shared by every tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_query: String,
    pub filter_status: StatusFilter,
}

impl ViewState {
    /// Orders matching the current search and status filter.
    #[must_use]
    pub fn orders<'a>(&self, data: &'a DashboardData) -> Vec<&'a Order> {
        filter_orders(&data.recent_orders, &self.search_query, self.filter_status)
    }

    /// Products matching the current search.
    #[must_use]
    pub fn products<'a>(&self, data: &'a DashboardData) -> Vec<&'a Product> {
        filter_products(&data.top_products, &self.search_query)
    }
}

/// Whether `order` matches a lowercase `needle` and the status filter.
///
/// The needle is matched as a substring of the order id or the customer
/// name, ignoring case. An empty needle matches every order.
#[must_use]
pub fn order_matches(order: &Order, needle: &str, status: StatusFilter) -> bool {
    let matches_search = order.id.as_str().to_lowercase().contains(needle)
        || order.customer.to_lowercase().contains(needle);
    matches_search && status.admits(order.status)
}

/// Filter orders by search query (id or customer) and status.
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], query: &str, status: StatusFilter) -> Vec<&'a Order> {
    let needle = query.to_lowercase();
    orders
        .iter()
        .filter(|order| order_matches(order, &needle, status))
        .collect()
}

/// Filter products by a case-insensitive substring of their name.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// Per-customer aggregate over a set of orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummary {
    pub name: String,
    pub order_count: usize,
    pub total_spent: Decimal,
    pub last_order: chrono::NaiveDate,
}

/// Group orders by customer name, in order of first appearance.
#[must_use]
pub fn customer_summaries(orders: &[&Order]) -> Vec<CustomerSummary> {
    let mut summaries: Vec<CustomerSummary> = Vec::new();
    for order in orders {
        if let Some(summary) = summaries.iter_mut().find(|s| s.name == order.customer) {
            summary.order_count += 1;
            summary.total_spent += order.amount;
            summary.last_order = summary.last_order.max(order.date);
        } else {
            summaries.push(CustomerSummary {
                name: order.customer.clone(),
                order_count: 1,
                total_spent: order.amount,
                last_order: order.date,
            });
        }
    }
    summaries
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::types::{OrderId, OrderStatus, ProductId};

    fn order(id: &str, customer: &str, amount: i64, status: OrderStatus) -> Order {
        Order {
            id: OrderId::from(id),
            customer: customer.to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 14).unwrap(),
            amount: Decimal::new(amount, 2),
            status,
        }
    }

    fn recent_orders() -> Vec<Order> {
        vec![
            order("#ORD-7842", "Sarah Johnson", 24999, OrderStatus::Delivered),
            order("#ORD-7841", "Michael Chen", 12950, OrderStatus::Processing),
            order("#ORD-7840", "Emma Wilson", 8999, OrderStatus::Shipped),
            order("#ORD-7839", "James Rodriguez", 45900, OrderStatus::Delivered),
            order("#ORD-7838", "Lisa Taylor", 19999, OrderStatus::Processing),
        ]
    }

    fn products() -> Vec<Product> {
        ["Wireless Headphones", "Smart Watch", "Bluetooth Speaker", "Phone Case"]
            .iter()
            .zip(1..)
            .map(|(name, id)| Product {
                id: ProductId::new(id),
                name: (*name).to_string(),
                sales: 10,
                stock: 10,
                price: Decimal::new(1999, 2),
                description: Some("wireless phone accessory".to_string()),
            })
            .collect()
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_processing_filter_yields_two() {
        let orders = recent_orders();
        let filtered = filter_orders(&orders, "", StatusFilter::Only(OrderStatus::Processing));
        assert_eq!(ids(&filtered), ["#ORD-7841", "#ORD-7838"]);
    }

    #[test]
    fn test_all_filter_with_empty_query_keeps_everything_in_order() {
        let orders = recent_orders();
        let filtered = filter_orders(&orders, "", StatusFilter::All);
        assert_eq!(filtered.len(), 5);
        assert_eq!(filtered[0].id.as_str(), "#ORD-7842");
        assert_eq!(filtered[4].id.as_str(), "#ORD-7838");
    }

    #[test]
    fn test_search_matches_id_or_customer_ignoring_case() {
        let orders = recent_orders();
        assert_eq!(
            ids(&filter_orders(&orders, "ord-7840", StatusFilter::All)),
            ["#ORD-7840"]
        );
        assert_eq!(
            ids(&filter_orders(&orders, "CHEN", StatusFilter::All)),
            ["#ORD-7841"]
        );
        assert!(filter_orders(&orders, "nobody", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_search_and_status_combine() {
        let orders = recent_orders();
        let filtered = filter_orders(&orders, "son", StatusFilter::Only(OrderStatus::Delivered));
        // Johnson and Wilson match "son"; only Johnson's order is delivered.
        assert_eq!(ids(&filtered), ["#ORD-7842"]);
    }

    #[test]
    fn test_filter_is_exact_partition_for_many_queries() {
        let orders = recent_orders();
        let queries = ["", "ord", "#ORD-78", "a", "TAYLOR", "7", "zzz", " "];
        let filters = [
            StatusFilter::All,
            StatusFilter::Only(OrderStatus::Processing),
            StatusFilter::Only(OrderStatus::Shipped),
            StatusFilter::Only(OrderStatus::Delivered),
            StatusFilter::Only(OrderStatus::Cancelled),
        ];

        for query in queries {
            for status in filters {
                let filtered = filter_orders(&orders, query, status);
                let needle = query.to_lowercase();
                for order in &orders {
                    let expected = (order.id.as_str().to_lowercase().contains(&needle)
                        || order.customer.to_lowercase().contains(&needle))
                        && status.admits(order.status);
                    let included = filtered.iter().any(|o| o.id == order.id);
                    assert_eq!(included, expected, "{query:?} {status:?} {}", order.id);
                }
            }
        }
    }

    #[test]
    fn test_product_filter_uses_name_only() {
        let products = products();
        let names = |q: &str| -> Vec<String> {
            filter_products(&products, q)
                .iter()
                .map(|p| p.name.clone())
                .collect()
        };

        assert_eq!(names("WIRELESS"), ["Wireless Headphones"]);
        assert_eq!(names("pHoNe"), ["Wireless Headphones", "Phone Case"]);
        // "accessory" only appears in descriptions.
        assert!(names("accessory").is_empty());
        assert_eq!(names("").len(), 4);
    }

    #[test]
    fn test_view_state_applies_to_dashboard_data() {
        let data = DashboardData {
            recent_orders: recent_orders(),
            top_products: products(),
            ..DashboardData::default()
        };
        let view = ViewState {
            search_query: "a".to_string(),
            filter_status: StatusFilter::Only(OrderStatus::Shipped),
        };
        assert_eq!(ids(&view.orders(&data)), ["#ORD-7840"]);
        assert_eq!(view.products(&data).len(), 4);
    }

    #[test]
    fn test_customer_summaries_group_by_name() {
        let mut orders = recent_orders();
        orders.push(order("#ORD-7837", "Sarah Johnson", 1001, OrderStatus::Shipped));
        let refs: Vec<&Order> = orders.iter().collect();

        let summaries = customer_summaries(&refs);
        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries[0].name, "Sarah Johnson");
        assert_eq!(summaries[0].order_count, 2);
        assert_eq!(summaries[0].total_spent, Decimal::new(26000, 2));
    }

    #[test]
    fn test_tab_paths_are_unique() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in Tab::ALL.iter().skip(i + 1) {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}
