use http::{Method, Uri};
use problem_core::HttpProblem;

use crate::response::ProblemResponse;

/// Router fallback answering unmatched routes with a 404 problem
pub async fn not_found_fallback(method: Method, uri: Uri) -> ProblemResponse {
    tracing::debug!("no route for {method} {uri}");

    HttpProblem::not_found()
        .with_detail(format!("no route for {method} {}", uri.path()))
        .with_instance(uri.path())
        .into()
}

/// 405 problem listing the methods a resource accepts
pub fn method_not_allowed(allowed: impl IntoIterator<Item = Method>, uri: &Uri) -> ProblemResponse {
    HttpProblem::method_not_allowed(allowed.into_iter().collect::<Vec<_>>())
        .with_instance(uri.path())
        .into()
}
