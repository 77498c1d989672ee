//! axum integration: problems as `application/problem+json` responses

mod fallback;
mod response;

pub use fallback::{method_not_allowed, not_found_fallback};
pub use response::{ProblemResponse, ProblemState, default_renderer, set_default_renderer};
