//! HTTP API over the document store

mod handlers;

use std::path::Path;
use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::config::Config;
use crate::store::DocumentStore;

/// Shared server state.
///
/// The store sits behind a single mutex and every handler holds it across
/// its whole load(-mutate-save) sequence, so concurrent requests cannot
/// interleave on the backing file.
pub struct AppState {
    store: Mutex<DocumentStore>,
}

impl AppState {
    /// Wrap a store for sharing across request handlers.
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}

/// Build the application router: the JSON API, permissive CORS and a
/// `no-store` cache header on every response, and a static file fallback
/// for anything outside the API surface.
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Unmatched non-GET paths get a bare 404 instead of ServeDir's 405.
    let static_files = ServeDir::new(static_dir)
        .not_found_service(not_found.into_service())
        .call_fallback_on_method_not_allowed(true);

    Router::new()
        .route("/api/all", get(handlers::get_all))
        .route("/api/stats", get(handlers::get_stats))
        .route(
            "/api/session/{date_key}",
            get(handlers::get_session).post(handlers::post_session),
        )
        .route(
            "/api/plan",
            get(handlers::get_plan).post(handlers::post_plan),
        )
        .fallback_service(static_files)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Bind the configured port and serve until the process is terminated.
pub async fn serve(config: &Config, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let app = build_router(state, &config.static_dir);

    info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
