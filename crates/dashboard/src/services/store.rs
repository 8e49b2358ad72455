//! Dashboard data store.
//!
//! Wraps the session-held [`DashboardState`] with the backend calls that
//! feed and mutate it. Every mutation is acknowledge-then-apply: local state
//! only changes once the backend has answered successfully.

use secrecy::SecretString;
use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::{
    DashboardData, DashboardState, NotificationId, Order, OrderId, OrderStatus, Product,
    ProductDraft, ProductId,
};

use super::{DashboardError, Mutation};
use crate::api::{ApiError, VendorApiClient};
use crate::models::{CurrentVendor, session_keys};

/// The vendor's dashboard state plus the client used to change it.
pub struct DashboardStore {
    api: VendorApiClient,
    token: SecretString,
    state: DashboardState,
}

impl DashboardStore {
    #[must_use]
    pub const fn new(api: VendorApiClient, token: SecretString, state: DashboardState) -> Self {
        Self { api, token, state }
    }

    /// Open the store cached in `session`, or a fresh loading one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub async fn open(
        session: &Session,
        api: VendorApiClient,
        vendor: &CurrentVendor,
    ) -> Result<Self, DashboardError> {
        let state = session
            .get::<DashboardState>(session_keys::DASHBOARD)
            .await?
            .unwrap_or_else(DashboardState::loading);
        Ok(Self::new(api, vendor.token.clone(), state))
    }

    /// Write the state back to `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn save(&self, session: &Session) -> Result<(), DashboardError> {
        session.insert(session_keys::DASHBOARD, &self.state).await?;
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Run the initial refresh if it has not happened yet.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::FetchFailure`] if that refresh fails.
    pub async fn ensure_loaded(&mut self) -> Result<(), DashboardError> {
        if self.state.is_loading() {
            self.refresh().await?;
        }
        Ok(())
    }

    /// Fetch summary, orders, products and notifications concurrently and
    /// replace the whole store.
    ///
    /// On failure the previous data is kept. Loading ends either way.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::FetchFailure`] if any fetch fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        let fetched = tokio::try_join!(
            self.api.summary(&self.token),
            self.api.recent_orders(&self.token),
            self.api.top_products(&self.token),
            self.api.notifications(&self.token),
        );

        match fetched {
            Ok((summary, recent_orders, top_products, notifications)) => {
                self.state.replace(DashboardData {
                    summary,
                    recent_orders,
                    top_products,
                    notifications,
                });
                tracing::debug!(
                    orders = self.state.data().recent_orders.len(),
                    products = self.state.data().top_products.len(),
                    unread = self.state.unread_count(),
                    "Dashboard refreshed"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching dashboard data");
                self.state.finish_loading();
                Err(DashboardError::FetchFailure(e))
            }
        }
    }

    /// Change an order's status. Returns the backend's copy of the order.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MutationFailure`] if the backend does not
    /// acknowledge; local state is then unchanged.
    #[instrument(skip(self), fields(order_id = %id, status = %status))]
    pub async fn update_order_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, DashboardError> {
        let order = self
            .api
            .update_order_status(&self.token, id, status)
            .await
            .map_err(|e| mutation_failed(Mutation::UpdateOrderStatus, e))?;

        if !self.state.apply_order_status(id, status) {
            tracing::debug!("Acknowledged order is not in the local store");
        }
        Ok(order)
    }

    /// Create a product and append it, bumping the product total.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MutationFailure`] if the backend does not
    /// acknowledge; local state is then unchanged.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn add_product(&mut self, draft: &ProductDraft) -> Result<Product, DashboardError> {
        let product = self
            .api
            .create_product(&self.token, draft)
            .await
            .map_err(|e| mutation_failed(Mutation::AddProduct, e))?;

        if !self.state.append_product(product.clone()) {
            tracing::warn!(product_id = %product.id, "Created product id was already present");
        }
        Ok(product)
    }

    /// Replace a product's editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MutationFailure`] if the backend does not
    /// acknowledge; local state is then unchanged.
    #[instrument(skip(self, draft), fields(product_id = %id))]
    pub async fn update_product(
        &mut self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, DashboardError> {
        let product = self
            .api
            .update_product(&self.token, id, draft)
            .await
            .map_err(|e| mutation_failed(Mutation::UpdateProduct, e))?;

        if !self.state.replace_product(id, product.clone()) {
            tracing::debug!("Acknowledged product is not in the local store");
        }
        Ok(product)
    }

    /// Mark a notification read. Local only; returns whether it flipped.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> bool {
        self.state.mark_notification_read(id)
    }
}

fn mutation_failed(mutation: Mutation, source: ApiError) -> DashboardError {
    tracing::error!(error = %source, %mutation, "Dashboard mutation failed");
    DashboardError::MutationFailure { mutation, source }
}
