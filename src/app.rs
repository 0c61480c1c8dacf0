use crate::config::Settings;
use crate::handlers;
use crate::service::Service;
use crate::trace_err;
use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, patch},
    Router,
};

use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::instrument;

fn todo_routes() -> Router<Service> {
    Router::new()
        .route(
            "/",
            get(handlers::todo::get_all).post(handlers::todo::add),
        )
        .route(
            "/{id}",
            patch(handlers::todo::complete).delete(handlers::todo::delete),
        )
}

fn cors_layer(settings: &Settings) -> CorsLayer {
    let origin = if settings.cors.allow_origin.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            settings
                .cors
                .allow_origin
                .iter()
                .filter_map(|o| trace_err!(o.parse::<HeaderValue>(), "invalid cors origin").ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::PUT,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
}

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service, settings: Settings) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .nest("/api/todo", todo_routes())
        .layer(cors_layer(&settings))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
