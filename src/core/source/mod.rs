//! Candidate list loading.
//!
//! A list can be given inline as a comma-separated argument, as a
//! newline-separated local file, or as a newline-separated remote URL.
//! Remote fetches optionally go through the proxy named by the standard
//! proxy environment variables; that proxy is never used for the probes
//! themselves. Whatever the source, entries are trimmed, empties dropped
//! and duplicates removed before the list reaches the checker.

use std::collections::HashSet;

use isahc::config::Configurable;
use isahc::{AsyncReadResponseExt, HttpClient};
use tracing::debug;
use url::Url;

use crate::error::{GgcError, Result};

/// Where the candidate list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Comma-separated hosts given directly on the command line.
    Inline,
    /// Newline-separated hosts in a local file.
    File,
    /// Newline-separated hosts served at a URL.
    Url,
}

/// Proxy endpoint taken from the standard environment variables, if any.
pub fn proxy_from_env() -> Option<String> {
    ["https_proxy", "HTTPS_PROXY", "http_proxy", "HTTP_PROXY"]
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .filter(|value| !value.trim().is_empty())
}

/// Load, trim and dedup the candidate list from the given source.
///
/// `proxy` only applies to [`SourceKind::Url`].
pub async fn load_candidates(
    input: &str,
    kind: SourceKind,
    proxy: Option<&str>,
) -> Result<Vec<String>> {
    let raw = match kind {
        SourceKind::Inline => input.split(',').map(str::to_string).collect(),
        SourceKind::File => read_list_file(input).await?,
        SourceKind::Url => fetch_list_url(input, proxy).await?,
    };
    let list = normalize(raw);
    if list.is_empty() {
        return Err(GgcError::EmptyList);
    }
    Ok(list)
}

async fn read_list_file(path: &str) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(split_lines(&text))
}

async fn fetch_list_url(list_url: &str, proxy: Option<&str>) -> Result<Vec<String>> {
    let parsed = Url::parse(list_url).map_err(|e| GgcError::InvalidListUrl(e.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(GgcError::InvalidListUrl(format!(
            "unsupported scheme: {}",
            parsed.scheme()
        )));
    }

    let mut builder = HttpClient::builder();
    if let Some(endpoint) = proxy {
        let uri = endpoint
            .parse::<isahc::http::Uri>()
            .map_err(|e| GgcError::InvalidProxy(endpoint.to_string(), e.to_string()))?;
        builder = builder.proxy(Some(uri));
    }
    let client = builder
        .build()
        .map_err(|e| GgcError::ClientInit(e.to_string()))?;

    debug!(url = list_url, proxied = proxy.is_some(), "downloading candidate list");
    let mut response = client
        .get_async(list_url)
        .await
        .map_err(|e| GgcError::ListFetch(e.to_string()))?;
    let status = response.status().as_u16();
    if status != 200 {
        return Err(GgcError::ListFetchStatus(status));
    }
    let text = response
        .text()
        .await
        .map_err(|e| GgcError::ListFetch(e.to_string()))?;
    Ok(split_lines(&text))
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Trim entries, drop empties and dedup keeping first occurrence.
pub fn normalize(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter_map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() || !seen.insert(trimmed.to_string()) {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
