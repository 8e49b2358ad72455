//! Built-in vendor backend.
//!
//! Serves the vendor API from an in-memory catalog seeded with fixture
//! data. Mutations change the catalog, so they show up on the next fetch.
//! Any non-empty bearer token is accepted.
//!
//! Mounted at `/api` by the dashboard when no external backend is
//! configured (see [`MockBackend::routes`]), or served on its own with the
//! `/api` prefix included (see [`MockBackend::router`]).

mod fixtures;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use vendor_dashboard_core::{
    DashboardData, Email, Notification, Order, Product, ProductDraft, ProductId, SummaryMetrics,
    VendorProfile,
};

use crate::api::StatusUpdate;

/// Errors returned by the mock endpoints.
#[derive(Debug, Error)]
enum MockError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0} not found")]
    NotFound(String),
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

/// In-memory vendor backend.
#[derive(Clone)]
pub struct MockBackend {
    catalog: Arc<RwLock<DashboardData>>,
}

impl MockBackend {
    /// Backend holding the fixture catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_catalog(fixtures::seed())
    }

    /// Backend holding `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: DashboardData) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Copy of the current catalog.
    pub async fn snapshot(&self) -> DashboardData {
        self.catalog.read().await.clone()
    }

    /// Endpoints without the `/api` prefix, for nesting under `/api`.
    pub fn routes(self) -> Router {
        let protected = Router::new()
            .route("/dashboard/summary", get(summary))
            .route("/orders/recent", get(recent_orders))
            .route("/orders/{id}", patch(update_order))
            .route("/products/top", get(top_products))
            .route("/products", post(create_product))
            .route("/products/{id}", put(update_product))
            .route("/notifications", get(notifications))
            .route_layer(middleware::from_fn(require_bearer));

        Router::new()
            .route("/auth/login", post(login))
            .merge(protected)
            .with_state(self)
    }

    /// Standalone router serving every endpoint under `/api`.
    pub fn router(self) -> Router {
        Router::new().nest("/api", self.routes())
    }
}

/// Reject requests without a non-empty bearer token.
async fn require_bearer(request: Request, next: Next) -> Response {
    let has_token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());

    if has_token {
        next.run(request).await
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct LoginReply {
    token: String,
    user: VendorProfile,
}

/// POST /api/auth/login
async fn login(Json(body): Json<LoginBody>) -> Result<Json<LoginReply>, MockError> {
    let email = Email::parse(&body.email).map_err(|_| MockError::InvalidCredentials)?;
    if body.password.is_empty() {
        return Err(MockError::InvalidCredentials);
    }

    tracing::debug!(email = %email, "Mock login accepted");
    Ok(Json(LoginReply {
        token: uuid::Uuid::new_v4().to_string(),
        user: VendorProfile {
            name: VendorProfile::fallback().name,
            email,
        },
    }))
}

/// GET /api/dashboard/summary
async fn summary(State(backend): State<MockBackend>) -> Json<SummaryMetrics> {
    Json(backend.catalog.read().await.summary.clone())
}

/// GET /api/orders/recent
async fn recent_orders(State(backend): State<MockBackend>) -> Json<Vec<Order>> {
    Json(backend.catalog.read().await.recent_orders.clone())
}

/// GET /api/products/top
async fn top_products(State(backend): State<MockBackend>) -> Json<Vec<Product>> {
    Json(backend.catalog.read().await.top_products.clone())
}

/// GET /api/notifications
async fn notifications(State(backend): State<MockBackend>) -> Json<Vec<Notification>> {
    Json(backend.catalog.read().await.notifications.clone())
}

/// PATCH /api/orders/{id}
async fn update_order(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Order>, MockError> {
    let mut catalog = backend.catalog.write().await;
    let order = catalog
        .recent_orders
        .iter_mut()
        .find(|o| o.id.as_str() == id)
        .ok_or_else(|| MockError::NotFound(format!("Order {id}")))?;

    order.status = update.status;
    tracing::debug!(order_id = %id, status = %update.status, "Mock order updated");
    Ok(Json(order.clone()))
}

/// POST /api/products
async fn create_product(
    State(backend): State<MockBackend>,
    Json(draft): Json<ProductDraft>,
) -> (StatusCode, Json<Product>) {
    let mut catalog = backend.catalog.write().await;
    let next_id = catalog
        .top_products
        .iter()
        .map(|p| p.id.as_i32())
        .max()
        .unwrap_or(0)
        + 1;

    let product = Product {
        id: ProductId::new(next_id),
        name: draft.name,
        sales: 0,
        stock: draft.stock,
        price: draft.price,
        description: draft.description,
    };
    catalog.top_products.push(product.clone());
    catalog.summary.total_products += 1;

    tracing::debug!(product_id = %product.id, "Mock product created");
    (StatusCode::CREATED, Json(product))
}

/// PUT /api/products/{id}
async fn update_product(
    State(backend): State<MockBackend>,
    Path(id): Path<ProductId>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, MockError> {
    let mut catalog = backend.catalog.write().await;
    let product = catalog
        .top_products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| MockError::NotFound(format!("Product {id}")))?;

    product.name = draft.name;
    product.price = draft.price;
    product.stock = draft.stock;
    product.description = draft.description;

    tracing::debug!(product_id = %id, "Mock product updated");
    Ok(Json(product.clone()))
}
