//! Structural classification of error-like values
//!
//! Every predicate here looks at the status a value exposes, never at its
//! concrete type. A JSON object `{ "httpStatus": 404 }` and an
//! [`HttpProblem`] built as a different kind but carrying 404 both classify
//! as "not found".

use serde_json::Value;

use crate::problem::HttpProblem;
use crate::status::{ErrorCategory, StatusKind};

/// A value that may expose the fields of an HTTP error
pub trait ProblemLike {
    /// Integer `httpStatus` the value exposes, if any
    ///
    /// No range check is applied: any integer counts.
    fn status_field(&self) -> Option<i64>;

    /// Whether the value also exposes a `title`
    fn has_title(&self) -> bool {
        false
    }
}

impl ProblemLike for HttpProblem {
    fn status_field(&self) -> Option<i64> {
        Some(i64::from(self.http_status()))
    }

    fn has_title(&self) -> bool {
        true
    }
}

/// JSON objects are read by field name: `httpStatus` and `title`
impl ProblemLike for Value {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn status_field(&self) -> Option<i64> {
        let status = self.get("httpStatus")?;

        status
            .as_i64()
            // integers above i64::MAX still count, saturated
            .or_else(|| status.as_u64().map(|_| i64::MAX))
            .or_else(|| {
                status
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                    .map(|f| f as i64)
            })
    }

    fn has_title(&self) -> bool {
        self.get("title").is_some_and(|title| !title.is_null())
    }
}

impl<T: ProblemLike> ProblemLike for Option<T> {
    fn status_field(&self) -> Option<i64> {
        self.as_ref().and_then(ProblemLike::status_field)
    }

    fn has_title(&self) -> bool {
        self.as_ref().is_some_and(ProblemLike::has_title)
    }
}

impl<T: ProblemLike + ?Sized> ProblemLike for &T {
    fn status_field(&self) -> Option<i64> {
        (**self).status_field()
    }

    fn has_title(&self) -> bool {
        (**self).has_title()
    }
}

impl<T: ProblemLike + ?Sized> ProblemLike for Box<T> {
    fn status_field(&self) -> Option<i64> {
        (**self).status_field()
    }

    fn has_title(&self) -> bool {
        (**self).has_title()
    }
}

impl ProblemLike for dyn std::error::Error + 'static {
    fn status_field(&self) -> Option<i64> {
        self.downcast_ref::<HttpProblem>().and_then(ProblemLike::status_field)
    }

    fn has_title(&self) -> bool {
        self.downcast_ref::<HttpProblem>().is_some()
    }
}

impl ProblemLike for dyn std::error::Error + Send + Sync + 'static {
    fn status_field(&self) -> Option<i64> {
        self.downcast_ref::<HttpProblem>().and_then(ProblemLike::status_field)
    }

    fn has_title(&self) -> bool {
        self.downcast_ref::<HttpProblem>().is_some()
    }
}

impl ProblemLike for anyhow::Error {
    fn status_field(&self) -> Option<i64> {
        self.downcast_ref::<HttpProblem>().and_then(ProblemLike::status_field)
    }

    fn has_title(&self) -> bool {
        self.downcast_ref::<HttpProblem>().is_some()
    }
}

/// Whether the value exposes an integer HTTP status
pub fn is_http_error<P: ProblemLike + ?Sized>(value: &P) -> bool {
    value.status_field().is_some()
}

/// Whether the value exposes an integer HTTP status and a title
pub fn is_http_problem<P: ProblemLike + ?Sized>(value: &P) -> bool {
    is_http_error(value) && value.has_title()
}

/// Whether the value exposes a status in 400–499
pub fn is_client_error<P: ProblemLike + ?Sized>(value: &P) -> bool {
    value.status_field().and_then(ErrorCategory::of) == Some(ErrorCategory::Client)
}

/// Whether the value exposes a status in 500–599
pub fn is_server_error<P: ProblemLike + ?Sized>(value: &P) -> bool {
    value.status_field().and_then(ErrorCategory::of) == Some(ErrorCategory::Server)
}

/// Whether the value exposes exactly the status of `kind`
pub fn is_kind<P: ProblemLike + ?Sized>(value: &P, kind: StatusKind) -> bool {
    value.status_field() == Some(i64::from(kind.code()))
}

macro_rules! kind_predicates {
    ($($name:ident => $kind:ident,)*) => {
        $(
            #[doc = concat!("Whether the value exposes the `", stringify!($kind), "` status")]
            pub fn $name<P: ProblemLike + ?Sized>(value: &P) -> bool {
                is_kind(value, StatusKind::$kind)
            }
        )*
    };
}

kind_predicates! {
    is_bad_request_error => BadRequest,
    is_unauthorized_error => Unauthorized,
    is_payment_required_error => PaymentRequired,
    is_forbidden_error => Forbidden,
    is_not_found_error => NotFound,
    is_method_not_allowed_error => MethodNotAllowed,
    is_not_acceptable_error => NotAcceptable,
    is_proxy_authentication_required_error => ProxyAuthenticationRequired,
    is_request_timeout_error => RequestTimeout,
    is_conflict_error => Conflict,
    is_gone_error => Gone,
    is_length_required_error => LengthRequired,
    is_precondition_failed_error => PreconditionFailed,
    is_payload_too_large_error => PayloadTooLarge,
    is_uri_too_long_error => UriTooLong,
    is_unsupported_media_type_error => UnsupportedMediaType,
    is_range_not_satisfiable_error => RangeNotSatisfiable,
    is_expectation_failed_error => ExpectationFailed,
    is_im_a_teapot_error => ImATeapot,
    is_misdirected_request_error => MisdirectedRequest,
    is_unprocessable_entity_error => UnprocessableEntity,
    is_locked_error => Locked,
    is_failed_dependency_error => FailedDependency,
    is_too_early_error => TooEarly,
    is_upgrade_required_error => UpgradeRequired,
    is_precondition_required_error => PreconditionRequired,
    is_too_many_requests_error => TooManyRequests,
    is_request_header_fields_too_large_error => RequestHeaderFieldsTooLarge,
    is_unavailable_for_legal_reasons_error => UnavailableForLegalReasons,
    is_internal_server_error => InternalServerError,
    is_not_implemented_error => NotImplemented,
    is_bad_gateway_error => BadGateway,
    is_service_unavailable_error => ServiceUnavailable,
    is_gateway_timeout_error => GatewayTimeout,
    is_http_version_not_supported_error => HttpVersionNotSupported,
    is_variant_also_negotiates_error => VariantAlsoNegotiates,
    is_insufficient_storage_error => InsufficientStorage,
    is_loop_detected_error => LoopDetected,
    is_not_extended_error => NotExtended,
    is_network_authentication_required_error => NetworkAuthenticationRequired,
}
