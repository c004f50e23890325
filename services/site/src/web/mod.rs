pub mod html;
pub mod pages;
pub mod rest;
pub mod state;

pub use pages::{home_handler, summary_page_handler};
pub use rest::{get_summary_handler, health_handler, list_summaries_handler};

use axum::{http::Method, routing::get, Router};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full application router: HTML pages, JSON API and API docs.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    // Public, read-only JSON API
    let api_router = Router::new()
        .route("/api/summaries", get(list_summaries_handler))
        .route("/api/summaries/{id}", get(get_summary_handler))
        .route("/health", get(health_handler))
        .layer(cors);

    let page_router = Router::new()
        .route("/", get(home_handler))
        .route("/summary/{id}", get(summary_page_handler));

    Router::new()
        .merge(page_router)
        .merge(api_router)
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", rest::ApiDoc::openapi()))
}
