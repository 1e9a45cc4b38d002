//! Shared test utilities.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use ggc::core::check::client::{ProbeClient, RequestError};

/// Scripted probe client: maps hosts to canned responses.
#[derive(Default)]
pub struct MockProbeClient {
    responses: HashMap<String, Result<(u16, Duration), RequestError>>,
    panics: HashSet<String>,
}

impl MockProbeClient {
    pub fn add_status(&mut self, host: &str, status: u16, millis: u64) {
        self.responses.insert(
            host.to_string(),
            Ok((status, Duration::from_millis(millis))),
        );
    }

    pub fn add_timeout(&mut self, host: &str) {
        self.responses
            .insert(host.to_string(), Err(RequestError::TimedOut));
    }

    pub fn add_transport_error(&mut self, host: &str, message: &str) {
        self.responses.insert(
            host.to_string(),
            Err(RequestError::Transport(message.to_string())),
        );
    }

    /// The probe task for this host panics, exercising join-failure capture.
    pub fn add_panic(&mut self, host: &str) {
        self.panics.insert(host.to_string());
    }
}

#[async_trait::async_trait]
impl ProbeClient for MockProbeClient {
    async fn get(&self, host: &str, _timeout_ms: u64) -> Result<(u16, Duration), RequestError> {
        if self.panics.contains(host) {
            panic!("scripted panic for {}", host);
        }
        self.responses
            .get(host)
            .cloned()
            .unwrap_or_else(|| Err(RequestError::Transport("host not mocked".to_string())))
    }
}
