//! Tests for the ranking comparator as a standalone pure function.

use std::cmp::Ordering;

use ggc::core::check::ranker::compare_outcomes;
use ggc::core::check::types::{CheckOutcome, ProbeResult};

fn outcome(host: &str, result: ProbeResult) -> CheckOutcome {
    CheckOutcome {
        host: host.to_string(),
        result,
    }
}

#[test]
fn test_faster_success_ranks_first() {
    let fast = outcome("a", ProbeResult::Valid { time_ms: 50 });
    let slow = outcome("b", ProbeResult::Valid { time_ms: 300 });

    assert_eq!(compare_outcomes(&fast, &slow), Ordering::Less);
    assert_eq!(compare_outcomes(&slow, &fast), Ordering::Greater);
}

#[test]
fn test_equal_latency_is_a_tie() {
    let a = outcome("a", ProbeResult::Valid { time_ms: 80 });
    let b = outcome("b", ProbeResult::Valid { time_ms: 80 });

    assert_eq!(compare_outcomes(&a, &b), Ordering::Equal);
}

#[test]
fn test_success_beats_every_failure_kind() {
    let ok = outcome("ok", ProbeResult::Valid { time_ms: 9_999 });
    let failures = [
        outcome("s", ProbeResult::WrongStatus { status_code: 503 }),
        outcome("t", ProbeResult::Timeout),
        outcome(
            "e",
            ProbeResult::TransportError {
                message: "reset".to_string(),
            },
        ),
    ];

    for failure in &failures {
        assert_eq!(compare_outcomes(&ok, failure), Ordering::Less);
        assert_eq!(compare_outcomes(failure, &ok), Ordering::Greater);
    }
}

#[test]
fn test_failure_precedence_wrong_status_then_transport_then_timeout() {
    let wrong_status = outcome("s", ProbeResult::WrongStatus { status_code: 404 });
    let transport = outcome(
        "e",
        ProbeResult::TransportError {
            message: "refused".to_string(),
        },
    );
    let timeout = outcome("t", ProbeResult::Timeout);

    assert_eq!(compare_outcomes(&wrong_status, &transport), Ordering::Less);
    assert_eq!(compare_outcomes(&transport, &timeout), Ordering::Less);
    assert_eq!(compare_outcomes(&wrong_status, &timeout), Ordering::Less);
    assert_eq!(compare_outcomes(&timeout, &wrong_status), Ordering::Greater);
}

#[test]
fn test_same_failure_kind_is_equal_rank() {
    let a = outcome("a", ProbeResult::WrongStatus { status_code: 403 });
    let b = outcome("b", ProbeResult::WrongStatus { status_code: 503 });
    assert_eq!(compare_outcomes(&a, &b), Ordering::Equal);

    let a = outcome("a", ProbeResult::Timeout);
    let b = outcome("b", ProbeResult::Timeout);
    assert_eq!(compare_outcomes(&a, &b), Ordering::Equal);

    let a = outcome(
        "a",
        ProbeResult::TransportError {
            message: "reset".to_string(),
        },
    );
    let b = outcome(
        "b",
        ProbeResult::TransportError {
            message: "refused".to_string(),
        },
    );
    assert_eq!(compare_outcomes(&a, &b), Ordering::Equal);
}
