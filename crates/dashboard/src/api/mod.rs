//! Vendor backend API client.
//!
//! JSON over HTTP. Every call except login carries the vendor's bearer token.
//!
//! # Endpoints
//!
//! ```text
//! POST  /api/auth/login          {email, password} -> {token, user}
//! GET   /api/dashboard/summary   -> SummaryMetrics
//! GET   /api/orders/recent       -> Order[]
//! PATCH /api/orders/{id}         {status} -> Order
//! GET   /api/products/top        -> Product[]
//! POST  /api/products            ProductDraft -> Product
//! PUT   /api/products/{id}       ProductDraft -> Product
//! GET   /api/notifications       -> Notification[]
//! ```

mod types;

pub use types::*;

use std::sync::Arc;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;
use vendor_dashboard_core::{
    Notification, Order, OrderId, OrderStatus, Product, ProductDraft, ProductId, SummaryMetrics,
};

const USER_AGENT: &str = concat!("vendor-dashboard/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur when talking to the vendor backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Credentials or token rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// The configured base URL cannot carry path segments.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Vendor backend client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct VendorApiClient {
    inner: Arc<VendorApiClientInner>,
}

struct VendorApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl VendorApiClient {
    /// Create a client for the backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be used as a base or the HTTP
    /// client fails to build.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            inner: Arc::new(VendorApiClientInner { client, base_url }),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a bearer token and the vendor's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the backend rejects the
    /// credentials.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email,
            password: password.expose_secret(),
        };
        self.send(Method::POST, None, &["api", "auth", "login"], Some(&body))
            .await
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Fetch the headline metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not parse.
    #[instrument(skip_all)]
    pub async fn summary(&self, token: &SecretString) -> Result<SummaryMetrics, ApiError> {
        self.get(token, &["api", "dashboard", "summary"]).await
    }

    /// Fetch the most recent orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not parse.
    #[instrument(skip_all)]
    pub async fn recent_orders(&self, token: &SecretString) -> Result<Vec<Order>, ApiError> {
        self.get(token, &["api", "orders", "recent"]).await
    }

    /// Fetch the best-selling products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not parse.
    #[instrument(skip_all)]
    pub async fn top_products(&self, token: &SecretString) -> Result<Vec<Product>, ApiError> {
        self.get(token, &["api", "products", "top"]).await
    }

    /// Fetch the vendor's notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not parse.
    #[instrument(skip_all)]
    pub async fn notifications(&self, token: &SecretString) -> Result<Vec<Notification>, ApiError> {
        self.get(token, &["api", "notifications"]).await
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Change an order's status. Returns the updated order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown order.
    #[instrument(skip(self, token), fields(order_id = %id))]
    pub async fn update_order_status(
        &self,
        token: &SecretString,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.send(
            Method::PATCH,
            Some(token),
            &["api", "orders", id.as_str()],
            Some(&StatusUpdate { status }),
        )
        .await
    }

    /// Create a product. Returns it with its backend-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the draft.
    #[instrument(skip(self, token, draft), fields(name = %draft.name))]
    pub async fn create_product(
        &self,
        token: &SecretString,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        self.send(Method::POST, Some(token), &["api", "products"], Some(draft))
            .await
    }

    /// Replace a product's editable fields. Returns the updated product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown product.
    #[instrument(skip(self, token, draft), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        token: &SecretString,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        let id = id.to_string();
        self.send(
            Method::PUT,
            Some(token),
            &["api", "products", &id],
            Some(draft),
        )
        .await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Resolve path segments against the base URL, percent-encoding each.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        token: &SecretString,
        segments: &[&str],
    ) -> Result<T, ApiError> {
        self.send::<T, ()>(Method::GET, Some(token), segments, None)
            .await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        token: Option<&SecretString>,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let mut request = self.inner.client.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let path = response.url().path().to_string();

        if status == 401 || status == 403 {
            return ApiError::Unauthorized;
        }

        if status == 404 {
            return ApiError::NotFound(path);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ApiError::Api { status, message }
    }
}

impl std::fmt::Debug for VendorApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::mock_api::MockBackend;

    async fn spawn_backend() -> VendorApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, MockBackend::seeded().router())
                .await
                .unwrap();
        });
        VendorApiClient::new(Url::parse(&format!("http://{addr}")).unwrap()).unwrap()
    }

    async fn login(client: &VendorApiClient) -> SecretString {
        client
            .login("vendor@example.com", &SecretString::from("hunter2"))
            .await
            .unwrap()
            .token
    }

    fn client_for(base: &str) -> VendorApiClient {
        VendorApiClient::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client_for("http://127.0.0.1:3002");
        let url = client.endpoint(&["api", "orders", "recent"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3002/api/orders/recent");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client_for("https://vendors.example.com/v1/");
        let url = client.endpoint(&["api", "notifications"]).unwrap();
        assert_eq!(url.as_str(), "https://vendors.example.com/v1/api/notifications");
    }

    #[test]
    fn test_endpoint_encodes_order_ids() {
        let client = client_for("http://127.0.0.1:3002");
        let url = client.endpoint(&["api", "orders", "#ORD-7842"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3002/api/orders/%23ORD-7842");
    }

    #[test]
    fn test_rejects_non_base_url() {
        let url = Url::parse("mailto:vendor@example.com").unwrap();
        assert!(matches!(
            VendorApiClient::new(url),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let client = spawn_backend().await;
        let err = client
            .login("not-an-email", &SecretString::from("hunter2"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));

        let err = client
            .login("vendor@example.com", &SecretString::from(""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_reads_require_token() {
        let client = spawn_backend().await;
        let err = client
            .summary(&SecretString::from(""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_reads_decode_fixtures() {
        let client = spawn_backend().await;
        let token = login(&client).await;

        let summary = client.summary(&token).await.unwrap();
        assert_eq!(summary.total_sales, Decimal::new(12540, 0));
        assert_eq!(summary.total_orders, 289);

        assert_eq!(client.recent_orders(&token).await.unwrap().len(), 5);
        assert_eq!(client.top_products(&token).await.unwrap().len(), 5);
        assert_eq!(client.notifications(&token).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_order_status_round_trips_hash_ids() {
        let client = spawn_backend().await;
        let token = login(&client).await;

        let order = client
            .update_order_status(&token, &OrderId::from("#ORD-7841"), OrderStatus::Shipped)
            .await
            .unwrap();
        assert_eq!(order.id.as_str(), "#ORD-7841");
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let client = spawn_backend().await;
        let token = login(&client).await;

        let err = client
            .update_order_status(&token, &OrderId::from("#ORD-0000"), OrderStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        let draft = ProductDraft::parse("Ghost", "1", "1", "").unwrap();
        let err = client
            .update_product(&token, ProductId::new(999), &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
