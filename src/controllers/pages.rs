use crate::error::AppError;
use crate::models::page_dto::{Page, RequestContext, Shortcut};
use crate::routes::router::AppState;
use crate::services::templates;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use minijinja::context;

pub fn render_page(state: &AppState, page: Page, uri: &Uri) -> Result<Html<String>, AppError> {
    templates::render(
        &state.templates,
        page.template(),
        context! { request => RequestContext::from(uri) },
    )
}

/// 503 page for handlers that need the database while it is unavailable.
pub fn unavailable(state: &AppState, uri: &Uri) -> Result<Response, AppError> {
    let html = templates::render(
        &state.templates,
        "unavailable.html",
        context! { request => RequestContext::from(uri) },
    )?;
    Ok((StatusCode::SERVICE_UNAVAILABLE, html).into_response())
}

pub fn router() -> Router<AppState> {
    let mut router = Router::new();

    for page in Page::ALL {
        router = router.route(
            page.path(),
            get(move |State(state): State<AppState>, uri: Uri| async move {
                render_page(&state, page, &uri)
            }),
        );
    }

    for shortcut in Shortcut::ALL {
        router = router.route(
            shortcut.path(),
            get(move || async move { Redirect::temporary(shortcut.target()) }),
        );
    }

    router
}
