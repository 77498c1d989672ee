use http::{HeaderMap, StatusCode};
use problem_config::RenderConfig;
use problem_core::{HttpError, HttpProblem};

use crate::document::ProblemDocument;
use crate::headers::problem_headers;

/// Everything needed to write a problem as a response
#[derive(Debug, Clone)]
pub struct RenderedProblem {
    /// Response status
    pub status: StatusCode,
    /// Headers requested by the problem (challenges, `Allow`, `Retry-After`)
    pub headers: HeaderMap,
    /// `application/problem+json` body
    pub document: ProblemDocument,
}

/// Renders problems according to a [`RenderConfig`]
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer for the given configuration
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Configuration this renderer was built with
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render status, headers and body for a problem
    pub fn render(&self, problem: &HttpProblem) -> RenderedProblem {
        if problem.is_server_error() {
            tracing::warn!(
                status = problem.http_status(),
                error_type = problem.error_type(),
                "rendering server error: {problem}"
            );
        } else {
            tracing::debug!(
                status = problem.http_status(),
                error_type = problem.error_type(),
                "rendering client error: {problem}"
            );
        }

        let headers = if self.config.emit_headers {
            problem_headers(problem)
        } else {
            HeaderMap::new()
        };

        RenderedProblem {
            status: problem.status_code(),
            headers,
            document: self.document(problem),
        }
    }

    /// Build the problem document for a problem
    ///
    /// Server error detail is left out unless `expose_server_detail` is set.
    /// A missing type is filled from `type_base` when one is configured.
    pub fn document(&self, problem: &HttpProblem) -> ProblemDocument {
        let detail = if problem.is_server_error() && !self.config.expose_server_detail {
            None
        } else {
            problem.detail().map(str::to_owned)
        };

        let problem_type = problem.problem_type().map(str::to_owned).or_else(|| {
            self.config
                .type_base
                .as_ref()
                .and_then(|base| base.join(problem.error_type()).ok())
                .map(String::from)
        });

        ProblemDocument {
            problem_type,
            title: Some(problem.title().to_owned()),
            status: Some(i64::from(problem.http_status())),
            detail,
            instance: problem.instance().map(str::to_owned),
            retry_after: problem.retry_after(),
            allow: problem
                .allow()
                .map(|methods| methods.iter().map(ToString::to_string).collect()),
        }
    }
}
