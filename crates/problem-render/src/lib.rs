//! RFC 7807 problem documents and response rendering

#![allow(clippy::must_use_candidate)]

mod document;
mod headers;
mod renderer;

pub use document::{PROBLEM_JSON, ProblemDocument};
pub use headers::problem_headers;
pub use renderer::{RenderedProblem, Renderer};
