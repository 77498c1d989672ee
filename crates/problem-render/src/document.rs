use http::Method;
use problem_core::{FactoryError, HttpProblem, StatusKind, from_status_code};
use serde::{Deserialize, Serialize};

/// Media type of a serialized [`ProblemDocument`]
pub const PROBLEM_JSON: &str = "application/problem+json";

/// RFC 7807 problem details body
///
/// Also used to read problem bodies returned by upstream services, so every
/// member is optional on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDocument {
    /// Problem type URI
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    /// Short summary of the problem type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTTP status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// Explanation specific to this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// URI identifying this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Retry delay in seconds (413, 429, 503)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// Accepted methods (405)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,
}

impl ProblemDocument {
    /// Turn the document back into a problem
    ///
    /// The status goes through [`from_status_code`], so a document whose
    /// status is not a registered error yields `Ok(None)`. The title always
    /// comes from the registry; the document's own title is ignored.
    /// Method names that are not valid HTTP tokens are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::InvalidStatusCode`] for a status above 511
    pub fn into_problem(self) -> Result<Option<HttpProblem>, FactoryError> {
        let Some(problem) = from_status_code(self.status)? else {
            return Ok(None);
        };

        let mut problem = match problem.kind() {
            StatusKind::PayloadTooLarge => HttpProblem::payload_too_large(self.retry_after),
            StatusKind::TooManyRequests => HttpProblem::too_many_requests(self.retry_after),
            StatusKind::ServiceUnavailable => HttpProblem::service_unavailable(self.retry_after),
            StatusKind::MethodNotAllowed => HttpProblem::method_not_allowed(self.allow.map(|methods| {
                methods
                    .iter()
                    .filter_map(|method| Method::from_bytes(method.as_bytes()).ok())
                    .collect::<Vec<_>>()
            })),
            _ => problem,
        };

        if let Some(detail) = self.detail {
            problem = problem.with_detail(detail);
        }
        if let Some(problem_type) = self.problem_type {
            problem = problem.with_type(problem_type);
        }
        if let Some(instance) = self.instance {
            problem = problem.with_instance(instance);
        }

        Ok(Some(problem))
    }
}
