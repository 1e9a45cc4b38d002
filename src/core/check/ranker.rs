//! Concurrent fan-out across candidates and ranking of the results.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::core::check::client::ProbeClient;
use crate::core::check::prober::probe;
use crate::core::check::types::{CheckOutcome, ProbeResult, DEFAULT_TIMEOUT_MS};

/// How [`check_all`] orders its results.
pub enum SortPolicy {
    /// Default ranking: working endpoints first, fastest first.
    Ranked,
    /// Escape hatch: keep the input order untouched.
    Unsorted,
    /// Caller-supplied comparator.
    Custom(fn(&CheckOutcome, &CheckOutcome) -> Ordering),
}

pub struct CheckOptions {
    pub timeout_ms: u64,
    pub sort: SortPolicy,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            sort: SortPolicy::Ranked,
        }
    }
}

/// Probe every candidate concurrently and collect one outcome per host.
///
/// All probes are launched before any is awaited (no concurrency cap) and
/// joined as a barrier: the call returns only once the slowest probe has
/// settled, bounded by the shared timeout. A task that fails to settle
/// (panic or cancellation) still yields a `TransportError` outcome for its
/// host, so the returned list always has the same cardinality as `hosts`.
pub async fn check_all(
    client: Arc<dyn ProbeClient>,
    hosts: &[String],
    options: &CheckOptions,
) -> Vec<CheckOutcome> {
    let handles: Vec<_> = hosts
        .iter()
        .map(|host| {
            let client = Arc::clone(&client);
            let host = host.clone();
            let timeout_ms = options.timeout_ms;
            tokio::spawn(async move { probe(client.as_ref(), &host, timeout_ms).await })
        })
        .collect();

    let settled = futures::future::join_all(handles).await;
    let mut outcomes = Vec::with_capacity(settled.len());
    for (joined, host) in settled.into_iter().zip(hosts) {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => outcomes.push(CheckOutcome {
                host: host.clone(),
                result: ProbeResult::TransportError {
                    message: e.to_string(),
                },
            }),
        }
    }

    match &options.sort {
        SortPolicy::Unsorted => {}
        SortPolicy::Ranked => outcomes.sort_by(compare_outcomes),
        // Vec::sort_by is stable, so equal-ranked outcomes keep input order.
        SortPolicy::Custom(cmp) => outcomes.sort_by(cmp),
    }
    outcomes
}

/// Three-way ranking of two outcomes, most useful first.
///
/// Working endpoints sort before any failure, and among themselves by
/// ascending response time. Failures rank by how much signal they carry:
/// a non-200 response (server reachable, protocol worked) beats a
/// transport error, which beats a timeout. Same-kind failures compare
/// equal, so a stable sort keeps their input order.
pub fn compare_outcomes(a: &CheckOutcome, b: &CheckOutcome) -> Ordering {
    use ProbeResult::*;
    match (&a.result, &b.result) {
        (Valid { time_ms: ta }, Valid { time_ms: tb }) => ta.cmp(tb),
        (Valid { .. }, _) => Ordering::Less,
        (_, Valid { .. }) => Ordering::Greater,
        (fa, fb) => failure_rank(fa).cmp(&failure_rank(fb)),
    }
}

fn failure_rank(result: &ProbeResult) -> u8 {
    match result {
        ProbeResult::WrongStatus { .. } => 0,
        ProbeResult::TransportError { .. } => 1,
        ProbeResult::Timeout => 2,
        // Unreachable: Valid pairs are handled before ranks are consulted.
        ProbeResult::Valid { .. } => u8::MAX,
    }
}
