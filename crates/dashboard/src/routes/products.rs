//! Products tab: searchable product list with add and edit forms.
//!
//! The add/edit modal is transient per-tab state carried in the query
//! string (`?adding=1`, `?edit={id}`).

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use vendor_dashboard_core::format::dollars;
use vendor_dashboard_core::{Product, ProductDraft, ProductId, Tab};

use super::layout::{Chrome, Page};
use super::render;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireVendorAuth;
use crate::models::Flash;
use crate::services::view::ViewQuery;
use crate::services::{DashboardError, DashboardStore, flash};
use crate::state::AppState;

/// Product row for the table.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub stock: i64,
    pub sales: i64,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: dollars(product.price),
            stock: product.stock,
            sales: product.sales,
        }
    }
}

/// Values prefilled in the edit modal.
#[derive(Debug, Clone)]
pub struct ProductFormView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub stock: i64,
    pub description: String,
}

impl From<&Product> for ProductFormView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock,
            description: product.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "products/index.html")]
struct ProductsTemplate {
    chrome: Chrome,
    products: Vec<ProductRow>,
    adding: bool,
    editing: Option<ProductFormView>,
}

/// Modal selection.
#[derive(Debug, Default, Deserialize)]
struct ModalQuery {
    adding: Option<String>,
    edit: Option<String>,
}

/// Add/edit form fields, kept as raw strings until parsed into a draft.
#[derive(Debug, Deserialize)]
struct ProductForm {
    name: String,
    price: String,
    stock: String,
    #[serde(default)]
    description: String,
}

impl ProductForm {
    fn draft(&self) -> Result<ProductDraft, DashboardError> {
        Ok(ProductDraft::parse(
            &self.name,
            &self.price,
            &self.stock,
            &self.description,
        )?)
    }
}

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(index).post(create))
        .route("/products/{id}", post(update))
}

/// GET /products
#[instrument(skip(state, session, vendor))]
async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Query(query): Query<ViewQuery>,
    Query(modal): Query<ModalQuery>,
) -> Result<Html<String>, AppError> {
    let mut page = Page::load(&state, &session, vendor, &query).await?;

    let products = page
        .view
        .products(page.data())
        .into_iter()
        .map(ProductRow::from)
        .collect();
    let editing = modal
        .edit
        .as_deref()
        .and_then(|raw| raw.parse::<ProductId>().ok())
        .and_then(|id| page.data().top_products.iter().find(|p| p.id == id))
        .map(ProductFormView::from);

    let template = ProductsTemplate {
        products,
        adding: modal.adding.is_some() && editing.is_none(),
        editing,
        chrome: page.chrome(Tab::Products),
    };
    render(&template)
}

/// POST /products
#[instrument(skip(state, session, vendor))]
async fn create(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, AppError> {
    let mut store = DashboardStore::open(&session, state.api().clone(), &vendor).await?;

    let result = match form.draft() {
        Ok(draft) => store.add_product(&draft).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(product) => {
            store.save(&session).await?;
            flash::push(&session, Flash::success(format!("Added {}.", product.name))).await?;
            Ok(Redirect::to("/products"))
        }
        Err(e) => {
            push_alert(&session, &e).await?;
            Ok(Redirect::to("/products?adding=1"))
        }
    }
}

/// POST /products/{id}
#[instrument(skip(state, session, vendor))]
async fn update(
    State(state): State<AppState>,
    session: Session,
    RequireVendorAuth(vendor): RequireVendorAuth,
    Path(id): Path<ProductId>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, AppError> {
    let mut store = DashboardStore::open(&session, state.api().clone(), &vendor).await?;

    let result = match form.draft() {
        Ok(draft) => store.update_product(id, &draft).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(product) => {
            store.save(&session).await?;
            flash::push(&session, Flash::success(format!("Updated {}.", product.name))).await?;
            Ok(Redirect::to("/products"))
        }
        Err(e) => {
            push_alert(&session, &e).await?;
            Ok(Redirect::to(&format!("/products?edit={id}")))
        }
    }
}

async fn push_alert(session: &Session, error: &DashboardError) -> Result<(), AppError> {
    match error.alert() {
        Some(alert) => flash::push(session, Flash::error(alert)).await?,
        None => return Err(AppError::Internal(error.to_string())),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use vendor_dashboard_core::DraftError;

    use super::*;

    fn form(name: &str, price: &str, stock: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_form_parses_into_draft() {
        let draft = form("Widget", "9.99", "10").draft().unwrap();
        assert_eq!(draft.price, Decimal::new(999, 2));
        assert_eq!(draft.stock, 10);
    }

    #[test]
    fn test_invalid_form_is_user_visible() {
        let err = form("Widget", "cheap", "10").draft().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::InvalidProduct(DraftError::InvalidPrice(_))
        ));
        assert!(err.alert().is_some());
    }

    #[test]
    fn test_product_row_formats_price() {
        let product = Product {
            id: ProductId::new(4),
            name: "Phone Case".to_string(),
            sales: 76,
            stock: 189,
            price: Decimal::new(1999, 2),
            description: None,
        };
        assert_eq!(ProductRow::from(&product).price, "$19.99");
        assert_eq!(ProductFormView::from(&product).price, "19.99");
    }
}
