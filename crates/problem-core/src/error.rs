use http::StatusCode;
use thiserror::Error;

use crate::problem::HttpProblem;

/// Trait for errors that can be converted to HTTP responses
///
/// Response-writing code only needs this to pick a status and a body,
/// independent of which concrete error type was raised.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `not_found`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

impl HttpError for HttpProblem {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    fn error_type(&self) -> &str {
        self.kind().name()
    }

    fn client_message(&self) -> String {
        if self.is_server_error() {
            self.title().to_owned()
        } else {
            self.message().to_owned()
        }
    }
}

/// Errors raised when a status code cannot be turned into a problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// Numeric status above the highest registered code
    #[error("invalid HTTP error status code: {code}")]
    InvalidStatusCode { code: i64 },

    /// Text that does not parse as a number
    #[error("status code is not numeric: {input:?}")]
    InvalidInput { input: String },
}
