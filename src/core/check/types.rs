// Core types for endpoint checking

use serde::Serialize;

/// Logical hostname of the probed service. Used verbatim in the URL for
/// hostname candidates, and as the pinned identity (HTTP `Host` + TLS SNI)
/// when a candidate is an IP literal.
pub const TRANSLATE_HOST: &str = "translate.googleapis.com";

/// Fixed request path probed on every candidate.
pub const PROBE_PATH: &str = "/translate_a/element.js";

/// Default per-candidate probe timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Classified result of a single probe.
///
/// Every way a probe can end is a variant here; the probing entry points
/// never return an error for an individual candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ProbeResult {
    /// HTTP 200 within the timeout window.
    Valid {
        /// Wall-clock time from request start to header arrival.
        time_ms: u64,
    },
    /// The server answered, but not with 200.
    WrongStatus { status_code: u16 },
    /// No response headers before the timeout elapsed.
    Timeout,
    /// DNS, TLS or connection-level failure.
    TransportError { message: String },
}

impl ProbeResult {
    /// Whether the candidate is directly usable.
    pub fn is_valid(&self) -> bool {
        matches!(self, ProbeResult::Valid { .. })
    }
}

/// One candidate's classified probe result.
///
/// The host string is carried through exactly as supplied, so callers can
/// correlate results with their input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub host: String,
    #[serde(flatten)]
    pub result: ProbeResult,
}
