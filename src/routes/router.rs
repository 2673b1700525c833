use crate::config::constants;
use crate::config::loader::Config;
use crate::controllers;
use crate::controllers::health::__path_health;
use crate::controllers::health::health;
use crate::models::health_dto::{DatabaseHealth, Health, HealthStatus};
use crate::models::status_dto::{DatabaseState, ServiceStatus};
use crate::routes::cors::cors_layer;
use crate::services::templates;
use axum::{routing::get, Router};
use minijinja::Environment;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace;
use tower_http::trace::TraceLayer;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
    pub templates: Arc<Environment<'static>>,
    pub status: ServiceStatus,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config, status: ServiceStatus) -> AppState {
        let templates = Arc::new(templates::environment(&config));
        AppState {
            pool,
            config: Arc::new(config),
            templates,
            status,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health),
    components(
        schemas(Health, HealthStatus, DatabaseHealth, DatabaseState)
    ),
    tags(
        (name = "health", description = "Health check endpoints")
    )
)]
struct ApiDoc;

pub fn create_routes(state: AppState) -> Router {
    let mut openapi = ApiDoc::openapi();
    openapi.info.title = state.config.app.name.clone();
    openapi.info.description = Some(state.config.app.description.clone());
    openapi.info.version = state.config.app.version.clone();

    let static_files = ServeDir::new(&state.config.static_dir);
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/health", get(health))
        .merge(controllers::pages::router())
        .merge(controllers::products::router())
        .merge(controllers::auth::router())
        .nest_service(constants::STATIC_PREFIX, static_files)
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", openapi))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}
