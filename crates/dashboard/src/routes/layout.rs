//! Shared page frame: header, sidebar, notifications and alerts.
//!
//! Every tab handler loads a [`Page`] (vendor, store, view state, pending
//! alert) and renders its template with the [`Chrome`] built from it.

use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::{DashboardData, Notification, Tab, ViewState};

use crate::error::AppError;
use crate::models::{CurrentVendor, Flash};
use crate::services::view::ViewQuery;
use crate::services::{DashboardStore, flash, view};
use crate::state::AppState;

/// Sidebar entry.
#[derive(Debug, Clone)]
pub struct TabLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Signed-in vendor as shown in the header.
#[derive(Debug, Clone)]
pub struct VendorView {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl From<&CurrentVendor> for VendorView {
    fn from(vendor: &CurrentVendor) -> Self {
        Self {
            name: vendor.profile.name.clone(),
            email: vendor.profile.email.to_string(),
            avatar_url: format!(
                "https://ui-avatars.com/api/?name={}&background=random",
                urlencoding::encode(&vendor.profile.name)
            ),
        }
    }
}

/// Notification as listed under the bell.
#[derive(Debug, Clone)]
pub struct NotificationView {
    pub id: i32,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
}

impl From<&Notification> for NotificationView {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.as_i32(),
            message: n.message.clone(),
            timestamp: n.timestamp.format("%b %-d, %-I:%M %p").to_string(),
            read: n.read,
        }
    }
}

/// Alert banner.
#[derive(Debug, Clone)]
pub struct FlashView {
    pub class: &'static str,
    pub message: String,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        Self {
            class: flash.kind.css_class(),
            message: flash.message,
        }
    }
}

/// Everything `base.html` renders around a tab.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: &'static str,
    pub current_path: &'static str,
    pub tabs: Vec<TabLink>,
    pub vendor: VendorView,
    pub search_query: String,
    pub unread_count: u32,
    pub notifications: Vec<NotificationView>,
    pub flash: Option<FlashView>,
}

/// Per-request view of the vendor's dashboard.
pub struct Page {
    pub vendor: CurrentVendor,
    pub store: DashboardStore,
    pub view: ViewState,
    flash: Option<Flash>,
}

impl Page {
    /// Load the store (running the initial refresh if needed), apply
    /// `query` to the view state and take any pending alert.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or written.
    #[instrument(skip_all)]
    pub async fn load(
        state: &AppState,
        session: &Session,
        vendor: CurrentVendor,
        query: &ViewQuery,
    ) -> Result<Self, AppError> {
        let view = view::load(session, query).await?;

        let mut store = DashboardStore::open(session, state.api().clone(), &vendor).await?;
        if store.ensure_loaded().await.is_err() {
            tracing::debug!("Rendering without fresh dashboard data");
        }
        store.save(session).await?;

        let flash = flash::take(session).await?;

        Ok(Self {
            vendor,
            store,
            view,
            flash,
        })
    }

    #[must_use]
    pub fn data(&self) -> &DashboardData {
        self.store.state().data()
    }

    /// Build the frame for `active`, consuming the pending alert.
    pub fn chrome(&mut self, active: Tab) -> Chrome {
        let state = self.store.state();
        Chrome {
            title: active.label(),
            current_path: active.path(),
            tabs: Tab::ALL
                .iter()
                .map(|&tab| TabLink {
                    path: tab.path(),
                    label: tab.label(),
                    icon: tab.icon(),
                    active: tab == active,
                })
                .collect(),
            vendor: VendorView::from(&self.vendor),
            search_query: self.view.search_query.clone(),
            unread_count: state.unread_count(),
            notifications: state
                .data()
                .notifications
                .iter()
                .map(NotificationView::from)
                .collect(),
            flash: self.flash.take().map(FlashView::from),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDateTime;
    use secrecy::SecretString;
    use vendor_dashboard_core::{Email, NotificationId, VendorProfile};

    use super::*;

    #[test]
    fn test_vendor_view_encodes_avatar_name() {
        let vendor = CurrentVendor {
            token: SecretString::from("t"),
            profile: VendorProfile {
                name: "Vendor User".to_string(),
                email: Email::parse("vendor@example.com").unwrap(),
            },
        };
        let view = VendorView::from(&vendor);
        assert_eq!(
            view.avatar_url,
            "https://ui-avatars.com/api/?name=Vendor%20User&background=random"
        );
    }

    #[test]
    fn test_notification_timestamp_format() {
        let n = Notification {
            id: NotificationId::new(2),
            message: "Product running low on stock".to_string(),
            timestamp: NaiveDateTime::parse_from_str("2023-10-14T16:45:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            read: false,
        };
        assert_eq!(NotificationView::from(&n).timestamp, "Oct 14, 4:45 PM");
    }
}
