use http::StatusCode;

use crate::error::FactoryError;
use crate::problem::HttpProblem;
use crate::status::StatusKind;

/// Raw status value handed to [`from_status_code`]
///
/// Built through `From` so callers can pass integers, floats, text, an
/// `http::StatusCode`, or an `Option` of any of those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusInput<'a> {
    /// No status at all
    Absent,
    /// Integer status
    Integer(i64),
    /// Floating point status, possibly NaN or fractional
    Float(f64),
    /// Text expected to hold a number (e.g. from a header or a query string)
    Text(&'a str),
}

impl From<i64> for StatusInput<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for StatusInput<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u16> for StatusInput<'_> {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for StatusInput<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for StatusInput<'_> {
    fn from(value: u64) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<usize> for StatusInput<'_> {
    fn from(value: usize) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for StatusInput<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for StatusInput<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl<'a> From<&'a str> for StatusInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for StatusInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<StatusCode> for StatusInput<'_> {
    fn from(value: StatusCode) -> Self {
        Self::Integer(i64::from(value.as_u16()))
    }
}

impl<'a, T> From<Option<T>> for StatusInput<'a>
where
    T: Into<StatusInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Build the problem registered for a status code
///
/// Returns `Ok(None)` when the value does not denote an HTTP error: absent,
/// NaN, below 400, fractional, or a code inside 400–511 with no registered
/// kind. The problem has no detail or extra fields set.
///
/// # Errors
///
/// Returns [`FactoryError::InvalidStatusCode`] for values above 511 and
/// [`FactoryError::InvalidInput`] for text that is not a finite number
pub fn from_status_code<'a>(code: impl Into<StatusInput<'a>>) -> Result<Option<HttpProblem>, FactoryError> {
    let status = match code.into() {
        StatusInput::Absent => return Ok(None),
        StatusInput::Integer(value) => Some(value),
        StatusInput::Float(value) => integral(value)?,
        StatusInput::Text(text) => parse_text(text)?,
    };

    let Some(status) = status else {
        return Ok(None);
    };

    lookup(status)
}

fn lookup(status: i64) -> Result<Option<HttpProblem>, FactoryError> {
    if status < i64::from(StatusKind::MIN) {
        return Ok(None);
    }

    if status > i64::from(StatusKind::MAX) {
        tracing::debug!("rejecting out-of-range status code {status}");
        return Err(FactoryError::InvalidStatusCode { code: status });
    }

    let problem = u16::try_from(status)
        .ok()
        .and_then(StatusKind::from_code)
        .map(HttpProblem::new);

    Ok(problem)
}

/// Reduce a float to an integer status, or `None` when it names no status
#[allow(clippy::cast_possible_truncation)]
fn integral(value: f64) -> Result<Option<i64>, FactoryError> {
    if value.is_nan() || value < f64::from(StatusKind::MIN) {
        return Ok(None);
    }

    if value > f64::from(StatusKind::MAX) {
        // saturating cast: +inf becomes i64::MAX
        return Err(FactoryError::InvalidStatusCode { code: value as i64 });
    }

    if value.fract() != 0.0 {
        return Ok(None);
    }

    Ok(Some(value as i64))
}

fn parse_text(text: &str) -> Result<Option<i64>, FactoryError> {
    let trimmed = text.trim();

    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(Some(value));
    }

    // "inf" and "NaN" parse as floats without naming a number; "1e400" overflows to inf
    match trimmed.parse::<f64>() {
        Ok(value) if trimmed.bytes().any(|b| b.is_ascii_digit()) => integral(value),
        _ => {
            tracing::debug!("rejecting non-numeric status code {text:?}");
            Err(FactoryError::InvalidInput { input: text.to_owned() })
        }
    }
}
