use crate::controllers::pages::unavailable;
use crate::error::AppError;
use crate::models::page_dto::RequestContext;
use crate::models::product_dao::Product;
use crate::models::user_dao::User;
use crate::routes::router::AppState;
use crate::services::templates;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use minijinja::context;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products/", get(catalog))
        .route("/products/admin/dashboard", get(admin_dashboard))
}

pub async fn catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
    uri: Uri,
) -> Result<Response, AppError> {
    if state.status.snapshot().is_degraded() {
        return unavailable(&state, &uri);
    }

    let products = Product::list(&state.pool, query.category.as_deref()).await?;
    let categories = Product::categories(&state.pool).await?;

    let html = templates::render(
        &state.templates,
        "products/catalog.html",
        context! {
            request => RequestContext::from(&uri),
            products => products,
            categories => categories,
            category => query.category,
        },
    )?;
    Ok(html.into_response())
}

pub async fn admin_dashboard(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    if state.status.snapshot().is_degraded() {
        return unavailable(&state, &uri);
    }

    let products = Product::list(&state.pool, None).await?;
    let user_count = User::count(&state.pool).await?;

    let html = templates::render(
        &state.templates,
        "admin/dashboard.html",
        context! {
            request => RequestContext::from(&uri),
            product_count => products.len(),
            user_count => user_count,
            products => products,
        },
    )?;
    Ok(html.into_response())
}
