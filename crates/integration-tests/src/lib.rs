//! End-to-end tests for the vendor dashboard.
//!
//! Each [`TestContext`] runs the full application (with its built-in
//! backend mounted at `/api`) on an ephemeral port and drives it with a
//! cookie-keeping HTTP client, the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vendor-dashboard-integration-tests
//! ```

#![allow(clippy::missing_panics_doc)]

use std::net::SocketAddr;

use reqwest::{Client, Response};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use vendor_dashboard::config::DashboardConfig;
use vendor_dashboard::state::AppState;

/// Credentials the built-in backend accepts.
pub const VENDOR_EMAIL: &str = "vendor@example.com";
pub const VENDOR_PASSWORD: &str = "password";

/// A running dashboard plus a client holding its session cookie.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestContext {
    /// Start a dashboard on `127.0.0.1:0`.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind dashboard listener");
        let address: SocketAddr = listener.local_addr().expect("dashboard local addr");
        let base_url = format!("http://{address}");

        let config = DashboardConfig::from_lookup(|key| match key {
            "DASHBOARD_BASE_URL" => Some(base_url.clone()),
            _ => None,
        })
        .expect("load test configuration");
        let state = AppState::new(config).expect("create application state");
        let app = vendor_dashboard::app(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("run dashboard server");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("build HTTP client");

        Self {
            client,
            base_url,
            shutdown: Some(shutdown_tx),
        }
    }

    /// Start a dashboard and sign in with the default vendor.
    pub async fn signed_in() -> Self {
        let ctx = Self::start().await;
        let page = ctx.login(VENDOR_EMAIL, VENDOR_PASSWORD).await;
        assert!(
            page.contains("Dashboard Overview"),
            "login should land on the overview"
        );
        ctx
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path`, following redirects.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request")
    }

    /// GET `path` and return the body of the final page.
    pub async fn page(&self, path: &str) -> String {
        self.get(path).await.text().await.expect("read page body")
    }

    /// POST a form to `path`, following redirects, and return the final page.
    pub async fn submit(&self, path: &str, form: &[(&str, &str)]) -> String {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request")
            .text()
            .await
            .expect("read page body")
    }

    /// Submit the login form and return the resulting page.
    pub async fn login(&self, email: &str, password: &str) -> String {
        self.submit("/auth/login", &[("email", email), ("password", password)])
            .await
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Number of times `needle` occurs in `haystack`.
#[must_use]
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// The unread badge value in the page header, if shown.
#[must_use]
pub fn unread_badge(page: &str) -> Option<u32> {
    let start = page.find("class=\"notification-badge\">")? + "class=\"notification-badge\">".len();
    let rest = page.get(start..)?;
    let end = rest.find('<')?;
    rest.get(..end)?.trim().parse().ok()
}
