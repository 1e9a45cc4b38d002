//! ggc — Google Translate endpoint checker.
//!
//! Checks whether a set of IP addresses or mirror hostnames can reach the
//! Google Translate element endpoint over HTTPS, classifies every probe
//! into success / wrong status / timeout / transport error, and ranks the
//! results by usefulness (working and fastest first).

pub mod cli;
pub mod core;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use crate::core::check::client::{IsahcProbeClient, ProbeClient, RequestError};
pub use crate::core::check::ranker::{check_all, compare_outcomes, CheckOptions, SortPolicy};
pub use crate::core::check::types::{CheckOutcome, ProbeResult, DEFAULT_TIMEOUT_MS};
pub use crate::error::{GgcError, Result};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
