//! Authentication route handlers.
//!
//! Email/password login against the vendor backend.

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::layout::FlashView;
use super::render;
use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::OptionalVendorAuth;
use crate::models::Flash;
use crate::services::auth::{self, Credentials};
use crate::services::flash;
use crate::state::AppState;

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginPageTemplate {
    flash: Option<FlashView>,
    email: String,
}

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    password: SecretString,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_page).post(login))
        .route("/auth/logout", post(logout))
}

/// Render the login page. Signed-in vendors go straight to the dashboard.
///
/// GET /auth/login
async fn login_page(
    session: Session,
    OptionalVendorAuth(vendor): OptionalVendorAuth,
) -> Result<Response, AppError> {
    if vendor.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let template = LoginPageTemplate {
        flash: flash::take(&session).await?.map(FlashView::from),
        email: String::new(),
    };
    Ok(render(&template)?.into_response())
}

/// POST /auth/login
#[instrument(skip(state, session, form), fields(email = %form.email))]
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let credentials = Credentials {
        email: form.email,
        password: form.password,
    };

    match auth::login(&session, state.api(), &credentials).await {
        Ok(vendor) => {
            set_sentry_user(vendor.profile.email.as_str());
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            let Some(alert) = e.alert() else {
                return Err(e.into());
            };
            let template = LoginPageTemplate {
                flash: Some(FlashView::from(Flash::error(alert))),
                email: credentials.email,
            };
            Ok(render(&template)?.into_response())
        }
    }
}

/// Logout and clear session.
///
/// POST /auth/logout
async fn logout(session: Session) -> Result<Redirect, AppError> {
    auth::logout(&session).await?;
    clear_sentry_user();
    Ok(Redirect::to("/auth/login"))
}
