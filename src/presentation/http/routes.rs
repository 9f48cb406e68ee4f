// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub serve_docs: bool,
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let origins: Vec<HeaderValue> = options
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut router = Router::new()
        .route("/health", get(health))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/articles/{id}", get(articles::get_article));

    if options.serve_docs {
        router = router.merge(openapi::docs_router());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
