//! Seed data for the built-in backend.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use vendor_dashboard_core::{
    DashboardData, Notification, NotificationId, Order, OrderId, OrderStatus, Product, ProductId,
    SummaryMetrics,
};

/// Catalog every fresh mock backend starts from.
pub fn seed() -> DashboardData {
    DashboardData {
        summary: SummaryMetrics {
            total_sales: Decimal::new(12540, 0),
            total_orders: 289,
            total_products: 42,
            new_customers: 56,
        },
        recent_orders: vec![
            order("#ORD-7842", "Sarah Johnson", (2023, 10, 15), 24999, OrderStatus::Delivered),
            order("#ORD-7841", "Michael Chen", (2023, 10, 14), 12950, OrderStatus::Processing),
            order("#ORD-7840", "Emma Wilson", (2023, 10, 14), 8999, OrderStatus::Shipped),
            order("#ORD-7839", "James Rodriguez", (2023, 10, 13), 45900, OrderStatus::Delivered),
            order("#ORD-7838", "Lisa Taylor", (2023, 10, 13), 19999, OrderStatus::Processing),
        ],
        top_products: vec![
            product(1, "Wireless Headphones", 142, 56, 9999),
            product(2, "Smart Watch", 98, 23, 19999),
            product(3, "Bluetooth Speaker", 87, 41, 5999),
            product(4, "Phone Case", 76, 189, 1999),
            product(5, "USB-C Cable", 65, 256, 1299),
        ],
        notifications: vec![
            notification(1, "New order received", (2023, 10, 15), (10, 30), false),
            notification(2, "Product running low on stock", (2023, 10, 14), (16, 45), false),
            notification(3, "Payment processed successfully", (2023, 10, 14), (9, 15), true),
        ],
    }
}

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn order(id: &str, customer: &str, on: (i32, u32, u32), cents: i64, status: OrderStatus) -> Order {
    Order {
        id: OrderId::from(id),
        customer: customer.to_string(),
        date: date(on),
        amount: Decimal::new(cents, 2),
        status,
    }
}

fn product(id: i32, name: &str, sales: i64, stock: i64, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        sales,
        stock,
        price: Decimal::new(cents, 2),
        description: None,
    }
}

fn notification(
    id: i32,
    message: &str,
    on: (i32, u32, u32),
    (h, m): (u32, u32),
    read: bool,
) -> Notification {
    Notification {
        id: NotificationId::new(id),
        message: message.to_string(),
        timestamp: NaiveDateTime::new(
            date(on),
            NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default(),
        ),
        read,
    }
}
