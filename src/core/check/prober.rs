//! Probe execution and outcome classification.

use tracing::debug;

use crate::core::check::client::{ProbeClient, RequestError};
use crate::core::check::types::{CheckOutcome, ProbeResult};

/// Probe one candidate and classify the result.
///
/// Never fails: every failure mode is folded into a [`ProbeResult`]
/// variant. One request per call, no retries, no shared state.
pub async fn probe(client: &dyn ProbeClient, host: &str, timeout_ms: u64) -> CheckOutcome {
    let result = match client.get(host, timeout_ms).await {
        Ok((200, elapsed)) => ProbeResult::Valid {
            time_ms: elapsed.as_millis() as u64,
        },
        Ok((status_code, _)) => ProbeResult::WrongStatus { status_code },
        Err(RequestError::TimedOut) => ProbeResult::Timeout,
        Err(RequestError::Transport(message)) => ProbeResult::TransportError { message },
    };
    debug!(host, result = ?result, "probe finished");
    CheckOutcome {
        host: host.to_string(),
        result,
    }
}
