//! CLI-level error types.
//!
//! Individual probe failures are never errors; they are carried as
//! [`crate::core::check::types::ProbeResult`] variants. The variants here
//! cover everything that can stop a run before probing starts: loading the
//! candidate list or building the HTTP client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GgcError {
    #[error("failed to create HTTP client: {0}")]
    ClientInit(String),
    #[error("failed to read the list file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("invalid list URL: {0}")]
    InvalidListUrl(String),
    #[error("failed to download the list: {0}")]
    ListFetch(String),
    #[error("the list download failed with status code {0}")]
    ListFetchStatus(u16),
    #[error("invalid proxy endpoint {0:?}: {1}")]
    InvalidProxy(String, String),
    #[error("the candidate list is empty")]
    EmptyList,
}

pub type Result<T> = std::result::Result<T, GgcError>;
