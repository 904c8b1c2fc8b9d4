//! Logical views and their resolution into rendered HTML.
//!
//! Handlers only pick a [`View`]. Turning that view into a response body is
//! left to [`render_view`], which runs as a middleware around the page
//! routes and asks the [`ViewResolver`] for the matching template.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{self, IntoResponse, Response},
};
use tracing::instrument;

use crate::utils::AppError;

/// Logical view identifier, independent of where or how the template is
/// stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct View(&'static str);

impl View {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A selected view is not rendered yet: the body stays empty and the view
/// rides along in the response extensions until [`render_view`] picks it up.
impl IntoResponse for View {
    fn into_response(self) -> Response {
        let mut response = ().into_response();
        response.extensions_mut().insert(self);
        response
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ViewError {
    #[error("No template found for view `{view}` at {}", path.display())]
    TemplateNotFound {
        view: View,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read the template for view `{view}` at {}", path.display())]
    Unexpected {
        view: View,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Maps view names to template files: `{prefix}/{name}{suffix}`.
#[derive(Clone, Debug)]
pub struct ViewResolver {
    prefix: PathBuf,
    suffix: String,
}

impl ViewResolver {
    pub fn new(prefix: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn template_path(&self, view: View) -> PathBuf {
        self.prefix.join(format!("{}{}", view.name(), self.suffix))
    }

    #[instrument(name = "Resolve view", skip(self), fields(view = %view))]
    pub async fn resolve(
        &self,
        view: View,
    ) -> Result<response::Html<String>, ViewError> {
        let path = self.template_path(view);
        match tokio::fs::read_to_string(&path).await {
            Ok(template) => Ok(response::Html(template)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(ViewError::TemplateNotFound { view, path, source })
            }
            Err(source) => Err(ViewError::Unexpected { view, path, source }),
        }
    }
}

/// Renders the [`View`] selected by the inner handler, if any.
///
/// Status code and headers set by the handler are kept; only the body and
/// its content type are replaced.
pub async fn render_view(
    State(resolver): State<Arc<ViewResolver>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    let Some(view) = response.extensions().get::<View>().copied() else {
        return response;
    };

    match resolver.resolve(view).await {
        Ok(html) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            );
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, html.0.into())
        }
        Err(e) => {
            tracing::error!(error = ?e, "Failed to render view {view}");
            AppError::E500(e.into()).into_response()
        }
    }
}
