//! Probe transport.
//!
//! Provides the HTTP client abstraction used by the prober, plus the
//! production implementation backed by isahc. The trait seam keeps the
//! classification and ranking logic testable without a network.

use std::net::Ipv4Addr;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use isahc::config::{Configurable, Dialer, RedirectPolicy};
use isahc::error::ErrorKind;
use isahc::{AsyncReadResponseExt, HttpClient, Request};
use regex::Regex;

use crate::core::check::types::{PROBE_PATH, TRANSLATE_HOST};
use crate::error::{GgcError, Result};

/// Raw failure of a single request, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No response headers before the timeout elapsed.
    TimedOut,
    /// DNS, TLS or connection-level failure, with the underlying cause.
    Transport(String),
}

/// HTTP client abstraction for dependency injection and testing.
#[async_trait::async_trait]
pub trait ProbeClient: Send + Sync {
    /// Execute one GET against a candidate.
    ///
    /// Returns the response status code and the time from request start to
    /// header arrival. Must not follow redirects and must not inspect the
    /// response body.
    async fn get(
        &self,
        host: &str,
        timeout_ms: u64,
    ) -> std::result::Result<(u16, Duration), RequestError>;
}

/// `true` when the candidate is a dotted IPv4 literal rather than a hostname.
pub fn is_ip_literal(host: &str) -> bool {
    static IP_RE: OnceLock<Regex> = OnceLock::new();
    IP_RE
        .get_or_init(|| Regex::new(r"^[0-9.]+$").unwrap())
        .is_match(host)
}

/// How a probe request will be issued: the URL plus an optional resolve
/// pin carrying the identity override for IP literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub url: String,
    pub resolve: Option<Ipv4Addr>,
}

/// Build the request target for a candidate.
///
/// Hostname candidates are probed directly with normal name-based TLS
/// validation. IP literals have no DNS-derived identity, so they are probed
/// through the logical hostname with a resolve pin (curl `--resolve`
/// semantics): the TLS SNI and the HTTP `Host` header both carry
/// [`TRANSLATE_HOST`] while the connection goes to the literal address.
pub fn probe_target(host: &str) -> std::result::Result<ProbeTarget, RequestError> {
    if is_ip_literal(host) {
        let addr: Ipv4Addr = host
            .parse()
            .map_err(|_| RequestError::Transport(format!("invalid IPv4 literal: {}", host)))?;
        Ok(ProbeTarget {
            url: format!("https://{}{}", TRANSLATE_HOST, PROBE_PATH),
            resolve: Some(addr),
        })
    } else {
        Ok(ProbeTarget {
            url: format!("https://{}{}", host, PROBE_PATH),
            resolve: None,
        })
    }
}

/// Production probe client backed by isahc.
pub struct IsahcProbeClient {
    client: HttpClient,
}

impl IsahcProbeClient {
    pub fn new() -> Result<Self> {
        let client = HttpClient::builder()
            // A 3xx answer is a wrong status, not something to chase.
            .redirect_policy(RedirectPolicy::None)
            .build()
            .map_err(|e| GgcError::ClientInit(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ProbeClient for IsahcProbeClient {
    async fn get(
        &self,
        host: &str,
        timeout_ms: u64,
    ) -> std::result::Result<(u16, Duration), RequestError> {
        let target = probe_target(host)?;

        let mut builder = Request::get(&target.url).timeout(Duration::from_millis(timeout_ms));
        if let Some(addr) = target.resolve {
            builder = builder.dial(Dialer::ip_socket((addr, 443)));
        }
        let request = builder
            .body(())
            .map_err(|e| RequestError::Transport(format!("request creation failed: {}", e)))?;

        let start = Instant::now();
        let mut response = self.client.send_async(request).await.map_err(|e| {
            if e == ErrorKind::Timeout {
                RequestError::TimedOut
            } else {
                RequestError::Transport(e.to_string())
            }
        })?;
        let elapsed = start.elapsed();
        let status = response.status().as_u16();

        // Drain the body so the connection can be released; the content
        // itself is never inspected.
        let _ = response.consume().await;

        Ok((status, elapsed))
    }
}
