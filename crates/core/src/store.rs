//! In-memory dashboard state.
//!
//! [`DashboardState`] is the aggregate the tabs render from. Network calls
//! live in the `vendor-dashboard` crate; the methods here are the local half
//! of each mutation and are only invoked once the backend has acknowledged.

use serde::{Deserialize, Serialize};

use crate::models::{Notification, Order, Product, SummaryMetrics};
use crate::types::{NotificationId, OrderId, OrderStatus, ProductId};

/// Everything one refresh fetches from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: SummaryMetrics,
    pub recent_orders: Vec<Order>,
    pub top_products: Vec<Product>,
    pub notifications: Vec<Notification>,
}

/// Whether the initial fetch has completed (successfully or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

/// Dashboard data plus the unread badge counter and loading phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    data: DashboardData,
    unread: u32,
    phase: LoadPhase,
}

impl DashboardState {
    /// Fresh state awaiting its first refresh.
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn data(&self) -> &DashboardData {
        &self.data
    }

    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Number shown on the notification badge.
    #[must_use]
    pub const fn unread_count(&self) -> u32 {
        self.unread
    }

    /// Replace the whole dataset after a successful refresh.
    ///
    /// The unread counter is recomputed from the incoming notifications.
    pub fn replace(&mut self, data: DashboardData) {
        self.unread = count_unread(&data.notifications);
        self.data = data;
        self.phase = LoadPhase::Ready;
    }

    /// Leave loading without touching the data (failed refresh).
    pub fn finish_loading(&mut self) {
        self.phase = LoadPhase::Ready;
    }

    /// Set the status of the order with `id`.
    ///
    /// Returns `false` and changes nothing when no order has that id.
    pub fn apply_order_status(&mut self, id: &OrderId, status: OrderStatus) -> bool {
        match self.data.recent_orders.iter_mut().find(|o| &o.id == id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }

    /// Append a newly created product and bump the product total.
    ///
    /// A product whose id is already present replaces the existing entry
    /// instead, leaving the total unchanged. Returns whether it was appended.
    pub fn append_product(&mut self, product: Product) -> bool {
        if let Some(existing) = self
            .data
            .top_products
            .iter_mut()
            .find(|p| p.id == product.id)
        {
            *existing = product;
            return false;
        }

        self.data.top_products.push(product);
        self.data.summary.total_products += 1;
        true
    }

    /// Replace the product with `id` by `product`.
    ///
    /// Returns `false` and changes nothing when no product has that id.
    pub fn replace_product(&mut self, id: ProductId, product: Product) -> bool {
        match self.data.top_products.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = product;
                true
            }
            None => false,
        }
    }

    /// Mark a notification as read.
    ///
    /// The unread counter only moves when an unread notification flips, so
    /// repeated calls and unknown ids leave it untouched.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> bool {
        let Some(notification) = self
            .data
            .notifications
            .iter_mut()
            .find(|n| n.id == id && !n.read)
        else {
            return false;
        };

        notification.read = true;
        self.unread = self.unread.saturating_sub(1);
        true
    }
}

fn count_unread(notifications: &[Notification]) -> u32 {
    let unread = notifications.iter().filter(|n| !n.read).count();
    u32::try_from(unread).unwrap_or(u32::MAX)
}
