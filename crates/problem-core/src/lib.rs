//! Typed taxonomy of HTTP error conditions
//!
//! One [`StatusKind`] per registered 4xx/5xx status, an [`HttpProblem`]
//! value carrying it, a factory from raw status codes, and structural
//! predicates for classifying error-like values.

#![allow(clippy::must_use_candidate)]

mod classify;
mod error;
mod factory;
mod problem;
mod status;

pub use classify::*;
pub use error::{FactoryError, HttpError};
pub use factory::{StatusInput, from_status_code};
pub use problem::{Challenge, HttpProblem};
pub use status::{ErrorCategory, StatusKind};
