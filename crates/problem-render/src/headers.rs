use http::header::{self, HeaderMap, HeaderName, HeaderValue};
use problem_core::{Challenge, HttpProblem};

/// Response headers a problem asks for
///
/// - `WWW-Authenticate` / `Proxy-Authenticate`: one entry per challenge, in order
/// - `Allow`: comma-separated method list
/// - `Retry-After`: delay in seconds
///
/// Values that are not valid header values are dropped with a warning.
pub fn problem_headers(problem: &HttpProblem) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Some(challenge) = problem.www_authenticate() {
        append_challenges(&mut headers, header::WWW_AUTHENTICATE, challenge);
    }

    if let Some(challenge) = problem.proxy_authenticate() {
        append_challenges(&mut headers, header::PROXY_AUTHENTICATE, challenge);
    }

    if let Some(methods) = problem.allow() {
        let value = methods.iter().map(http::Method::as_str).collect::<Vec<_>>().join(", ");
        insert(&mut headers, header::ALLOW, &value);
    }

    if let Some(seconds) = problem.retry_after() {
        headers.insert(header::RETRY_AFTER, HeaderValue::from(seconds));
    }

    headers
}

fn append_challenges(headers: &mut HeaderMap, name: HeaderName, challenge: &Challenge) {
    for value in challenge.iter() {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.append(name.clone(), value);
            }
            Err(e) => tracing::warn!("dropping invalid {name} challenge: {e}"),
        }
    }
}

fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(e) => tracing::warn!("dropping invalid {name} header: {e}"),
    }
}
