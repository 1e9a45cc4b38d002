pub mod client;
pub mod prober;
pub mod ranker;
pub mod types;

// Re-export commonly used items
pub use client::{is_ip_literal, probe_target, IsahcProbeClient, ProbeClient, RequestError};
pub use prober::probe;
pub use ranker::{check_all, compare_outcomes, CheckOptions, SortPolicy};
pub use types::*;
