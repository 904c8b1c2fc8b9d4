mod health_check;
pub mod pages;

use std::sync::Arc;

use axum::{body::Body, http::Request, routing::get};
use tower_http::trace::TraceLayer;

use crate::views::ViewResolver;

pub const HEALTH: &str = "/health";

pub fn get_router(resolver: ViewResolver) -> axum::Router {
    axum::Router::new()
        .route(HEALTH, get(health_check::health_check))
        .merge(pages::router(Arc::new(resolver)))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<Body>| {
                tracing::info_span!(
                    "HTTP request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %uuid::Uuid::new_v4(),
                )
            },
        ))
}
