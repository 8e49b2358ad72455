//! Chart.js input shaping.
//!
//! The page hands these structures to Chart.js as-is; nothing here draws.

use serde::Serialize;

use crate::models::Product;

const SALES_TREND_LABELS: [&str; 10] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
];
const SALES_TREND_VALUES: [i64; 10] = [1250, 1900, 2100, 2800, 2300, 3000, 3200, 3500, 4000, 4250];

const CUSTOMER_SPLIT_LABELS: [&str; 2] = ["New", "Returning"];
const CUSTOMER_SPLIT_VALUES: [i64; 2] = [35, 65];

/// Chart.js chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// One colour for the whole dataset, or one per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(&'static str),
    PerPoint(Vec<&'static str>),
}

/// A Chart.js dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<i64>,
    pub background_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// `{labels, datasets}` as Chart.js expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Full Chart.js configuration: type, data and the shared options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: serde_json::Value,
}

impl ChartConfig {
    /// Wrap `data` with the responsive, legend-on-top options every chart uses.
    #[must_use]
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            kind,
            data,
            options: serde_json::json!({
                "responsive": true,
                "plugins": { "legend": { "position": "top" } },
            }),
        }
    }

    /// JSON for the page's `data-chart` attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Monthly sales line.
#[must_use]
pub fn sales_trend() -> ChartData {
    ChartData {
        labels: SALES_TREND_LABELS.iter().map(ToString::to_string).collect(),
        datasets: vec![Dataset {
            label: Some("Sales ($)".to_string()),
            data: SALES_TREND_VALUES.to_vec(),
            background_color: Colors::Single("rgba(54, 162, 235, 0.2)"),
            border_color: Some("rgba(54, 162, 235, 1)"),
            border_width: 2,
            tension: Some(0.3),
        }],
    }
}

/// New vs returning customers pie.
#[must_use]
pub fn customer_distribution() -> ChartData {
    ChartData {
        labels: CUSTOMER_SPLIT_LABELS.iter().map(ToString::to_string).collect(),
        datasets: vec![Dataset {
            label: None,
            data: CUSTOMER_SPLIT_VALUES.to_vec(),
            background_color: Colors::PerPoint(vec![
                "rgba(255, 99, 132, 0.7)",
                "rgba(54, 162, 235, 0.7)",
            ]),
            border_color: None,
            border_width: 1,
            tension: None,
        }],
    }
}

/// Units sold per product, one bar per product in store order.
#[must_use]
pub fn product_performance(products: &[Product]) -> ChartData {
    ChartData {
        labels: products.iter().map(|p| p.name.clone()).collect(),
        datasets: vec![Dataset {
            label: Some("Units Sold".to_string()),
            data: products.iter().map(|p| p.sales).collect(),
            background_color: Colors::Single("rgba(75, 192, 192, 0.6)"),
            border_color: Some("rgba(75, 192, 192, 1)"),
            border_width: 1,
            tension: None,
        }],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::ProductId;

    #[test]
    fn test_product_performance_projects_names_and_sales() {
        let products: Vec<Product> = [("Smart Watch", 98), ("Phone Case", 76)]
            .into_iter()
            .zip(1..)
            .map(|((name, sales), id)| Product {
                id: ProductId::new(id),
                name: name.to_string(),
                sales,
                stock: 1,
                price: Decimal::ONE,
                description: None,
            })
            .collect();

        let chart = product_performance(&products);
        assert_eq!(chart.labels, ["Smart Watch", "Phone Case"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data, [98, 76]);
    }

    #[test]
    fn test_product_performance_empty() {
        let chart = product_performance(&[]);
        assert!(chart.labels.is_empty());
        assert!(chart.datasets[0].data.is_empty());
    }

    #[test]
    fn test_series_lengths_match_labels() {
        for chart in [sales_trend(), customer_distribution()] {
            assert_eq!(chart.labels.len(), chart.datasets[0].data.len());
        }
    }

    #[test]
    fn test_config_json_shape() {
        let json = ChartConfig::new(ChartKind::Pie, customer_distribution())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "pie");
        assert_eq!(value["data"]["labels"][1], "Returning");
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"][0], "rgba(255, 99, 132, 0.7)");
        assert!(value["data"]["datasets"][0].get("label").is_none());
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "top");
    }
}
