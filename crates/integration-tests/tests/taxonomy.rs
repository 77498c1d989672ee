use problem_core::*;
use serde_json::json;
use strum::{EnumCount, IntoEnumIterator};

type Predicate = fn(&HttpProblem) -> bool;

const PREDICATES: [(StatusKind, Predicate); StatusKind::COUNT] = [
    (StatusKind::BadRequest, is_bad_request_error::<HttpProblem>),
    (StatusKind::Unauthorized, is_unauthorized_error::<HttpProblem>),
    (StatusKind::PaymentRequired, is_payment_required_error::<HttpProblem>),
    (StatusKind::Forbidden, is_forbidden_error::<HttpProblem>),
    (StatusKind::NotFound, is_not_found_error::<HttpProblem>),
    (StatusKind::MethodNotAllowed, is_method_not_allowed_error::<HttpProblem>),
    (StatusKind::NotAcceptable, is_not_acceptable_error::<HttpProblem>),
    (
        StatusKind::ProxyAuthenticationRequired,
        is_proxy_authentication_required_error::<HttpProblem>,
    ),
    (StatusKind::RequestTimeout, is_request_timeout_error::<HttpProblem>),
    (StatusKind::Conflict, is_conflict_error::<HttpProblem>),
    (StatusKind::Gone, is_gone_error::<HttpProblem>),
    (StatusKind::LengthRequired, is_length_required_error::<HttpProblem>),
    (StatusKind::PreconditionFailed, is_precondition_failed_error::<HttpProblem>),
    (StatusKind::PayloadTooLarge, is_payload_too_large_error::<HttpProblem>),
    (StatusKind::UriTooLong, is_uri_too_long_error::<HttpProblem>),
    (StatusKind::UnsupportedMediaType, is_unsupported_media_type_error::<HttpProblem>),
    (StatusKind::RangeNotSatisfiable, is_range_not_satisfiable_error::<HttpProblem>),
    (StatusKind::ExpectationFailed, is_expectation_failed_error::<HttpProblem>),
    (StatusKind::ImATeapot, is_im_a_teapot_error::<HttpProblem>),
    (StatusKind::MisdirectedRequest, is_misdirected_request_error::<HttpProblem>),
    (StatusKind::UnprocessableEntity, is_unprocessable_entity_error::<HttpProblem>),
    (StatusKind::Locked, is_locked_error::<HttpProblem>),
    (StatusKind::FailedDependency, is_failed_dependency_error::<HttpProblem>),
    (StatusKind::TooEarly, is_too_early_error::<HttpProblem>),
    (StatusKind::UpgradeRequired, is_upgrade_required_error::<HttpProblem>),
    (StatusKind::PreconditionRequired, is_precondition_required_error::<HttpProblem>),
    (StatusKind::TooManyRequests, is_too_many_requests_error::<HttpProblem>),
    (
        StatusKind::RequestHeaderFieldsTooLarge,
        is_request_header_fields_too_large_error::<HttpProblem>,
    ),
    (
        StatusKind::UnavailableForLegalReasons,
        is_unavailable_for_legal_reasons_error::<HttpProblem>,
    ),
    (StatusKind::InternalServerError, is_internal_server_error::<HttpProblem>),
    (StatusKind::NotImplemented, is_not_implemented_error::<HttpProblem>),
    (StatusKind::BadGateway, is_bad_gateway_error::<HttpProblem>),
    (StatusKind::ServiceUnavailable, is_service_unavailable_error::<HttpProblem>),
    (StatusKind::GatewayTimeout, is_gateway_timeout_error::<HttpProblem>),
    (
        StatusKind::HttpVersionNotSupported,
        is_http_version_not_supported_error::<HttpProblem>,
    ),
    (StatusKind::VariantAlsoNegotiates, is_variant_also_negotiates_error::<HttpProblem>),
    (StatusKind::InsufficientStorage, is_insufficient_storage_error::<HttpProblem>),
    (StatusKind::LoopDetected, is_loop_detected_error::<HttpProblem>),
    (StatusKind::NotExtended, is_not_extended_error::<HttpProblem>),
    (
        StatusKind::NetworkAuthenticationRequired,
        is_network_authentication_required_error::<HttpProblem>,
    ),
];

const REGISTERED: [u16; 40] = [
    400, 401, 402, 403, 404, 405, 406, 407, 408, 409, 410, 411, 412, 413, 414, 415, 416, 417, 418, 421, 422, 423,
    424, 425, 426, 428, 429, 431, 451, 500, 501, 502, 503, 504, 505, 506, 507, 508, 510, 511,
];

#[test]
fn factory_covers_every_registered_code() {
    for code in REGISTERED {
        let problem = from_status_code(code).unwrap().unwrap();
        let kind = StatusKind::from_code(code).unwrap();

        assert_eq!(problem.http_status(), code);
        assert_eq!(problem.title(), kind.title());
        assert_eq!(problem.detail(), None);
        assert_eq!(problem.message(), kind.title());
    }

    let codes: Vec<u16> = StatusKind::iter().map(StatusKind::code).collect();
    assert_eq!(codes, REGISTERED);
}

#[test]
fn below_range_absent_or_nan_is_no_result() {
    for code in [-1_i64, 0, 200, 304, 399] {
        assert_eq!(from_status_code(code), Ok(None), "{code}");
    }
    assert_eq!(from_status_code(None::<i64>), Ok(None));
    assert_eq!(from_status_code(f64::NAN), Ok(None));
}

#[test]
fn unregistered_codes_in_range_are_no_result() {
    let mut unregistered = 0;
    for code in 400_u16..=511 {
        if REGISTERED.contains(&code) {
            continue;
        }
        unregistered += 1;
        assert_eq!(from_status_code(code), Ok(None), "{code}");
    }
    assert_eq!(unregistered, 112 - 40);
}

#[test]
fn above_range_is_invalid_status_code() {
    for code in [512_i64, 600, 999, i64::MAX] {
        assert_eq!(
            from_status_code(code),
            Err(FactoryError::InvalidStatusCode { code }),
            "{code}"
        );
    }
}

#[test]
fn numeric_text_matches_number() {
    assert_eq!(from_status_code("404"), from_status_code(404));
    assert_eq!(from_status_code(" 503 "), from_status_code(503));
    assert_eq!(from_status_code("419"), Ok(None));
    assert_eq!(from_status_code("700"), from_status_code(700));
    assert!(matches!(
        from_status_code("teapot"),
        Err(FactoryError::InvalidInput { .. })
    ));
}

#[test]
fn exactly_one_kind_predicate_per_problem() {
    for kind in StatusKind::iter() {
        let problem = HttpProblem::new(kind).with_detail("context");
        let matching: Vec<StatusKind> = PREDICATES
            .iter()
            .filter(|(_, predicate)| predicate(&problem))
            .map(|(kind, _)| *kind)
            .collect();

        assert_eq!(matching, [kind]);
    }
}

#[test]
fn categories_split_on_hundreds() {
    for kind in StatusKind::iter() {
        let problem = HttpProblem::new(kind);
        let code = kind.code();

        assert!(is_http_problem(&problem));
        assert_eq!(is_client_error(&problem), (400..=499).contains(&code), "{code}");
        assert_eq!(is_server_error(&problem), (500..=599).contains(&code), "{code}");
    }

    for status in [399, 400, 499, 500, 599, 600] {
        let value = json!({ "httpStatus": status });
        assert_eq!(is_client_error(&value), (400..=499).contains(&status), "{status}");
        assert_eq!(is_server_error(&value), (500..=599).contains(&status), "{status}");
    }
}

#[test]
fn bare_status_object_is_error_but_not_problem() {
    let value = json!({ "httpStatus": 404 });

    assert!(is_http_error(&value));
    assert!(is_not_found_error(&value));
    assert!(!is_http_problem(&value));
    assert!(is_http_problem(&json!({ "httpStatus": 404, "title": "Not Found" })));
}

#[test]
fn challenge_keeps_given_form() {
    let listed = HttpProblem::unauthorized(Challenge::from(["Basic", "Bearer"]));
    let challenge = listed.www_authenticate().unwrap();
    assert_eq!(challenge.len(), 2);
    assert_eq!(challenge.iter().collect::<Vec<_>>(), ["Basic", "Bearer"]);
    assert_eq!(listed.detail(), None);

    let single = HttpProblem::unauthorized(Challenge::from("Basic")).with_detail("Login failed");
    assert_eq!(single.www_authenticate(), Some(&Challenge::Single("Basic".to_owned())));
    assert_eq!(single.message(), "Login failed");
}

#[test]
fn retry_after_kept_or_absent() {
    let problem = HttpProblem::too_many_requests(600_u64).with_detail("slow down");
    assert_eq!(problem.retry_after(), Some(600));
    assert_eq!(problem.to_string(), "slow down");

    assert_eq!(HttpProblem::too_many_requests(None).retry_after(), None);
}

#[test]
fn erased_errors_are_classified() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(HttpProblem::bad_gateway());
    assert!(is_server_error(&boxed));
    assert!(is_bad_gateway_error(&boxed));

    let error = anyhow::Error::from(HttpProblem::forbidden()).context("loading tenant");
    assert!(is_forbidden_error(&error));

    let plain = anyhow::anyhow!("disk full");
    assert!(!is_http_error(&plain));
}
