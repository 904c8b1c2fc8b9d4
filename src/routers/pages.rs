//! The page routing table: each path selects one view and nothing else.

use std::sync::Arc;

use axum::routing::any;

use crate::views::{View, ViewResolver, render_view};

pub const INDEX: &str = "/index";
pub const LOGIN: &str = "/login";

pub const INDEX_VIEW: View = View::new("index");
pub const LOGIN_VIEW: View = View::new("login");

pub async fn index() -> View {
    INDEX_VIEW
}

pub async fn login() -> View {
    LOGIN_VIEW
}

/// The routing table alone: responses carry the selected [`View`] but no
/// rendered body. Page routes answer any method.
pub fn routes<S>() -> axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    axum::Router::new()
        .route(INDEX, any(index))
        .route(LOGIN, any(login))
}

/// [`routes`] with views rendered by `resolver`.
pub fn router<S>(resolver: Arc<ViewResolver>) -> axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes()
        .route_layer(axum::middleware::from_fn_with_state(
            resolver,
            render_view,
        ))
}
