use axum::response::IntoResponse;
use http::header;
use problem_config::RenderConfig;
use problem_core::HttpProblem;
use problem_render::Renderer;
use problem_server::{ProblemResponse, default_renderer, set_default_renderer};

// Runs in its own test binary: the default renderer is process-wide and can
// only be installed once.
#[test]
fn installed_default_renderer_is_used_by_conversions() {
    let renderer = Renderer::new(RenderConfig {
        emit_headers: false,
        ..RenderConfig::default()
    });
    set_default_renderer(renderer).unwrap();

    assert!(!default_renderer().config().emit_headers);
    assert!(set_default_renderer(Renderer::default()).is_err());

    let response = ProblemResponse::from(HttpProblem::service_unavailable(120_u64)).into_response();
    assert!(!response.headers().contains_key(header::RETRY_AFTER));
}
