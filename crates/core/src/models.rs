//! Records exchanged with the vendor backend.
//!
//! Field names follow the backend's camelCase JSON. Monetary values travel as
//! JSON numbers and are held as [`Decimal`] once decoded.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Email, NotificationId, OrderId, OrderStatus, ProductId};

/// Headline figures shown on the overview cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sales: Decimal,
    pub total_orders: u64,
    pub total_products: u64,
    pub new_customers: u64,
}

/// A recent order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: OrderStatus,
}

/// A catalog product with its sales and stock figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sales: i64,
    pub stock: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A vendor notification. `read` only ever flips from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub read: bool,
}

/// Profile of the signed-in vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub name: String,
    pub email: Email,
}

impl VendorProfile {
    /// Profile assumed when a stored token is found without a profile.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            name: "Vendor User".to_string(),
            email: Email::from_static("vendor@example.com"),
        }
    }
}

/// Errors raised while turning product form input into a [`ProductDraft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("product name is required")]
    MissingName,
    #[error("price must be a number: {0:?}")]
    InvalidPrice(String),
    #[error("price cannot be negative")]
    NegativePrice,
    #[error("stock must be a whole number: {0:?}")]
    InvalidStock(String),
}

/// Body of the add-product and update-product calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductDraft {
    /// Build a draft from raw form fields.
    ///
    /// Price is parsed as a decimal and stock as an integer. A blank
    /// description is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when the name is blank or a numeric field does
    /// not parse.
    pub fn parse(
        name: &str,
        price: &str,
        stock: &str,
        description: &str,
    ) -> Result<Self, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let price: Decimal = price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice(price.to_owned()))?;
        if price.is_sign_negative() {
            return Err(DraftError::NegativePrice);
        }

        let stock = stock
            .trim()
            .parse::<i64>()
            .map_err(|_| DraftError::InvalidStock(stock.to_owned()))?;

        let description = Some(description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_owned);

        Ok(Self {
            name: name.to_owned(),
            price,
            stock,
            description,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_draft_parses_widget_form() {
        let draft = ProductDraft::parse("Widget", "9.99", "10", "").unwrap();
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, dec("9.99"));
        assert_eq!(draft.stock, 10);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_draft_rejects_bad_input() {
        assert_eq!(
            ProductDraft::parse("  ", "1", "1", ""),
            Err(DraftError::MissingName)
        );
        assert!(matches!(
            ProductDraft::parse("Widget", "abc", "1", ""),
            Err(DraftError::InvalidPrice(_))
        ));
        assert_eq!(
            ProductDraft::parse("Widget", "-1", "1", ""),
            Err(DraftError::NegativePrice)
        );
        assert!(matches!(
            ProductDraft::parse("Widget", "1", "1.5", ""),
            Err(DraftError::InvalidStock(_))
        ));
    }

    #[test]
    fn test_order_decodes_backend_json() {
        let order: Order = serde_json::from_str(
            r##"{"id":"#ORD-7839","customer":"James Rodriguez","date":"2023-10-13","amount":459.00,"status":"Delivered"}"##,
        )
        .unwrap();
        assert_eq!(order.id.as_str(), "#ORD-7839");
        assert_eq!(order.amount, dec("459"));
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_summary_uses_camel_case() {
        let summary: SummaryMetrics = serde_json::from_str(
            r#"{"totalSales":12540,"totalOrders":289,"totalProducts":42,"newCustomers":56}"#,
        )
        .unwrap();
        assert_eq!(summary.total_sales, dec("12540"));
        assert_eq!(summary.new_customers, 56);
    }

    #[test]
    fn test_fallback_profile() {
        let profile = VendorProfile::fallback();
        assert_eq!(profile.name, "Vendor User");
        assert_eq!(profile.email.as_str(), "vendor@example.com");
    }
}
