use crate::controllers::pages::unavailable;
use crate::error::AppError;
use crate::models::page_dto::RequestContext;
use crate::models::user_dao::User;
use crate::routes::router::AppState;
use crate::services::templates;
use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use minijinja::context;

pub fn router() -> Router<AppState> {
    Router::new().route("/auth/admin/users", get(admin_users))
}

pub async fn admin_users(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    if state.status.snapshot().is_degraded() {
        return unavailable(&state, &uri);
    }

    let users = User::list(&state.pool).await?;

    let html = templates::render(
        &state.templates,
        "admin/users.html",
        context! {
            request => RequestContext::from(&uri),
            users => users,
        },
    )?;
    Ok(html.into_response())
}
