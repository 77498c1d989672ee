use std::fmt;

use http::Method;
use serde::{Deserialize, Serialize};

use crate::status::{ErrorCategory, StatusKind};

/// Authentication challenge(s) for a `WWW-Authenticate` or
/// `Proxy-Authenticate` header
///
/// A single challenge and a list of challenges are kept apart so the value
/// reads back in the form it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Challenge {
    /// One challenge string (e.g. `Basic realm="api"`)
    Single(String),
    /// Ordered list of challenge strings
    Multiple(Vec<String>),
}

impl Challenge {
    /// Iterate over the challenges in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Single(challenge) => std::slice::from_ref(challenge),
            Self::Multiple(challenges) => challenges,
        };
        slice.iter().map(String::as_str)
    }

    /// Number of challenges
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(challenges) => challenges.len(),
        }
    }

    /// Whether there are no challenges at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Challenge {
    fn from(challenge: &str) -> Self {
        Self::Single(challenge.to_owned())
    }
}

impl From<String> for Challenge {
    fn from(challenge: String) -> Self {
        Self::Single(challenge)
    }
}

impl From<Vec<String>> for Challenge {
    fn from(challenges: Vec<String>) -> Self {
        Self::Multiple(challenges)
    }
}

impl From<Vec<&str>> for Challenge {
    fn from(challenges: Vec<&str>) -> Self {
        Self::Multiple(challenges.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Challenge {
    fn from(challenges: [&str; N]) -> Self {
        Self::Multiple(challenges.into_iter().map(str::to_owned).collect())
    }
}

/// An HTTP error: one of the registered status kinds plus caller context
///
/// Status and title are fixed by the kind. Everything else is set while
/// building the value and never changes afterwards. The header-related
/// fields only exist on the kinds that use them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProblem {
    kind: StatusKind,
    detail: Option<String>,
    problem_type: Option<String>,
    instance: Option<String>,
    challenge: Option<Challenge>,
    allow: Option<Vec<Method>>,
    retry_after: Option<u64>,
}

impl HttpProblem {
    /// Create a problem of the given kind with every optional field absent
    pub const fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            detail: None,
            problem_type: None,
            instance: None,
            challenge: None,
            allow: None,
            retry_after: None,
        }
    }

    /// 401 with optional `WWW-Authenticate` challenge(s)
    pub fn unauthorized(challenge: impl Into<Option<Challenge>>) -> Self {
        Self {
            challenge: challenge.into(),
            ..Self::new(StatusKind::Unauthorized)
        }
    }

    /// 407 with optional `Proxy-Authenticate` challenge(s)
    pub fn proxy_authentication_required(challenge: impl Into<Option<Challenge>>) -> Self {
        Self {
            challenge: challenge.into(),
            ..Self::new(StatusKind::ProxyAuthenticationRequired)
        }
    }

    /// 405 with an optional list of the methods the resource does accept
    pub fn method_not_allowed(allow: impl Into<Option<Vec<Method>>>) -> Self {
        Self {
            allow: allow.into(),
            ..Self::new(StatusKind::MethodNotAllowed)
        }
    }

    /// 413 with an optional retry delay in seconds
    pub fn payload_too_large(retry_after: impl Into<Option<u64>>) -> Self {
        Self {
            retry_after: retry_after.into(),
            ..Self::new(StatusKind::PayloadTooLarge)
        }
    }

    /// 429 with an optional retry delay in seconds
    pub fn too_many_requests(retry_after: impl Into<Option<u64>>) -> Self {
        Self {
            retry_after: retry_after.into(),
            ..Self::new(StatusKind::TooManyRequests)
        }
    }

    /// 503 with an optional retry delay in seconds
    pub fn service_unavailable(retry_after: impl Into<Option<u64>>) -> Self {
        Self {
            retry_after: retry_after.into(),
            ..Self::new(StatusKind::ServiceUnavailable)
        }
    }

    /// Attach a human-readable description of this occurrence
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach a problem type URI
    #[must_use]
    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = Some(problem_type.into());
        self
    }

    /// Attach a URI identifying this occurrence
    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Registered kind of this problem
    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Numeric HTTP status
    pub const fn http_status(&self) -> u16 {
        self.kind.code()
    }

    /// Fixed title of the kind
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Client or server category
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Caller-supplied detail, if any
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Problem type URI, if one was attached
    pub fn problem_type(&self) -> Option<&str> {
        self.problem_type.as_deref()
    }

    /// Occurrence URI, if one was attached
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Challenge(s) for `WWW-Authenticate`; only ever set on 401
    pub fn www_authenticate(&self) -> Option<&Challenge> {
        match self.kind {
            StatusKind::Unauthorized => self.challenge.as_ref(),
            _ => None,
        }
    }

    /// Challenge(s) for `Proxy-Authenticate`; only ever set on 407
    pub fn proxy_authenticate(&self) -> Option<&Challenge> {
        match self.kind {
            StatusKind::ProxyAuthenticationRequired => self.challenge.as_ref(),
            _ => None,
        }
    }

    /// Methods for the `Allow` header; only ever set on 405
    pub fn allow(&self) -> Option<&[Method]> {
        self.allow.as_deref()
    }

    /// Retry delay in seconds; only ever set on 413, 429 and 503
    pub const fn retry_after(&self) -> Option<u64> {
        self.retry_after
    }

    /// Whether the status is 4xx
    pub const fn is_client_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Client)
    }

    /// Whether the status is 5xx
    pub const fn is_server_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Server)
    }

    /// Message shown when the problem is displayed or logged
    ///
    /// This is the detail when one was given, otherwise the title.
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or_else(|| self.title())
    }
}

impl From<StatusKind> for HttpProblem {
    fn from(kind: StatusKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for HttpProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for HttpProblem {}

macro_rules! plain_constructors {
    ($($name:ident => $kind:ident,)*) => {
        impl HttpProblem {
            $(
                #[doc = concat!("`", stringify!($kind), "` problem with no detail")]
                pub const fn $name() -> Self {
                    Self::new(StatusKind::$kind)
                }
            )*
        }
    };
}

plain_constructors! {
    bad_request => BadRequest,
    payment_required => PaymentRequired,
    forbidden => Forbidden,
    not_found => NotFound,
    not_acceptable => NotAcceptable,
    request_timeout => RequestTimeout,
    conflict => Conflict,
    gone => Gone,
    length_required => LengthRequired,
    precondition_failed => PreconditionFailed,
    uri_too_long => UriTooLong,
    unsupported_media_type => UnsupportedMediaType,
    range_not_satisfiable => RangeNotSatisfiable,
    expectation_failed => ExpectationFailed,
    im_a_teapot => ImATeapot,
    misdirected_request => MisdirectedRequest,
    unprocessable_entity => UnprocessableEntity,
    locked => Locked,
    failed_dependency => FailedDependency,
    too_early => TooEarly,
    upgrade_required => UpgradeRequired,
    precondition_required => PreconditionRequired,
    request_header_fields_too_large => RequestHeaderFieldsTooLarge,
    unavailable_for_legal_reasons => UnavailableForLegalReasons,
    internal_server_error => InternalServerError,
    not_implemented => NotImplemented,
    bad_gateway => BadGateway,
    gateway_timeout => GatewayTimeout,
    http_version_not_supported => HttpVersionNotSupported,
    variant_also_negotiates => VariantAlsoNegotiates,
    insufficient_storage => InsufficientStorage,
    loop_detected => LoopDetected,
    not_extended => NotExtended,
    network_authentication_required => NetworkAuthenticationRequired,
}
