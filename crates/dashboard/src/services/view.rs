//! Search query and status filter persistence.
//!
//! The view state outlives tab switches: it is kept in the session and
//! updated from the `q` and `status` query parameters of any tab.

use serde::Deserialize;
use tower_sessions::Session;
use vendor_dashboard_core::{StatusFilter, ViewState};

use crate::models::session_keys;

/// Query parameters that change the view state. Absent fields keep the
/// stored value.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

impl ViewQuery {
    /// Whether the query carries any view change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.q.is_none() && self.status.is_none()
    }

    /// Apply to `view`. An unrecognised status is ignored.
    pub fn apply(&self, view: &mut ViewState) {
        if let Some(q) = &self.q {
            view.search_query = q.trim().to_string();
        }
        if let Some(status) = &self.status {
            match status.parse::<StatusFilter>() {
                Ok(filter) => view.filter_status = filter,
                Err(e) => tracing::debug!(error = %e, "Ignoring status filter"),
            }
        }
    }
}

/// Load the view state, applying `query` and saving it back if it changes
/// anything.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
pub async fn load(
    session: &Session,
    query: &ViewQuery,
) -> Result<ViewState, tower_sessions::session::Error> {
    let mut view = session
        .get::<ViewState>(session_keys::VIEW)
        .await?
        .unwrap_or_default();

    if !query.is_empty() {
        query.apply(&mut view);
        session.insert(session_keys::VIEW, &view).await?;
    }
    Ok(view)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;
    use vendor_dashboard_core::OrderStatus;

    use super::*;

    fn query(q: Option<&str>, status: Option<&str>) -> ViewQuery {
        ViewQuery {
            q: q.map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn test_apply_updates_given_fields_only() {
        let mut view = ViewState {
            search_query: "chen".to_string(),
            filter_status: StatusFilter::All,
        };
        query(None, Some("Processing")).apply(&mut view);
        assert_eq!(view.search_query, "chen");
        assert_eq!(view.filter_status, StatusFilter::Only(OrderStatus::Processing));

        query(Some("  "), Some("bogus")).apply(&mut view);
        assert_eq!(view.search_query, "");
        assert_eq!(view.filter_status, StatusFilter::Only(OrderStatus::Processing));

        query(None, Some("all")).apply(&mut view);
        assert_eq!(view.filter_status, StatusFilter::All);
    }

    #[tokio::test]
    async fn test_view_survives_across_pages() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        let view = load(&session, &query(Some("taylor"), Some("Processing")))
            .await
            .unwrap();
        assert_eq!(view.search_query, "taylor");

        let view = load(&session, &ViewQuery::default()).await.unwrap();
        assert_eq!(view.search_query, "taylor");
        assert_eq!(view.filter_status, StatusFilter::Only(OrderStatus::Processing));
    }
}
