use std::sync::{Arc, OnceLock};

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, header};
use problem_config::Config;
use problem_core::HttpProblem;
use problem_render::{PROBLEM_JSON, Renderer};

static DEFAULT_RENDERER: OnceLock<Arc<Renderer>> = OnceLock::new();

/// Renderer used by problems converted without an explicit [`ProblemState`]
///
/// Falls back to [`Renderer::default`] unless [`set_default_renderer`] ran first.
pub fn default_renderer() -> Arc<Renderer> {
    Arc::clone(DEFAULT_RENDERER.get_or_init(|| Arc::new(Renderer::default())))
}

/// Install the process-wide default renderer
///
/// # Errors
///
/// Returns the renderer back if a default was already installed or used
pub fn set_default_renderer(renderer: Renderer) -> Result<(), Renderer> {
    DEFAULT_RENDERER
        .set(Arc::new(renderer))
        .map_err(Arc::unwrap_or_clone)
}

/// Shared renderer for handlers, built once from configuration
#[derive(Debug, Clone, Default)]
pub struct ProblemState {
    renderer: Arc<Renderer>,
}

impl ProblemState {
    /// Share a renderer between handlers
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }

    /// Build the renderer from the `[render]` section
    pub fn from_config(config: &Config) -> Self {
        Self::new(Renderer::new(config.render.clone()))
    }

    /// Renderer used by [`ProblemState::respond`]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Pair a problem with this state's renderer
    pub fn respond(&self, problem: HttpProblem) -> ProblemResponse {
        ProblemResponse::new(problem, Arc::clone(&self.renderer))
    }
}

/// A problem ready to be written as an `application/problem+json` response
///
/// Handlers can return `Result<T, ProblemResponse>` and use `?` on
/// [`HttpProblem`] values; those pick up the default renderer.
#[derive(Debug, Clone)]
pub struct ProblemResponse {
    problem: HttpProblem,
    renderer: Arc<Renderer>,
}

impl ProblemResponse {
    /// Pair a problem with the renderer that will write it
    pub const fn new(problem: HttpProblem, renderer: Arc<Renderer>) -> Self {
        Self { problem, renderer }
    }

    /// Problem to be written
    pub const fn problem(&self) -> &HttpProblem {
        &self.problem
    }

    /// Take the problem back out
    pub fn into_problem(self) -> HttpProblem {
        self.problem
    }
}

impl From<HttpProblem> for ProblemResponse {
    fn from(problem: HttpProblem) -> Self {
        Self::new(problem, default_renderer())
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let rendered = self.renderer.render(&self.problem);

        let mut response = (rendered.status, rendered.headers, Json(rendered.document)).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));

        response
    }
}
