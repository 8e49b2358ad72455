//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiError, VendorApiClient};
use crate::config::DashboardConfig;

/// Application state shared across all handlers.
///
/// Cheap to clone: everything sits behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    api: VendorApiClient,
}

impl AppState {
    /// Build the state, pointing the API client at the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be created.
    pub fn new(config: DashboardConfig) -> Result<Self, ApiError> {
        let api = VendorApiClient::new(config.api_base_url().clone())?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, api }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn api(&self) -> &VendorApiClient {
        &self.inner.api
    }
}
