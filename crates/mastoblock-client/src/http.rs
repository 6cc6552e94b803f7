//! Shared plumbing for the HTTP clients.

use mastoblock_core::{Result, SyncError};
use reqwest::header::{HeaderMap, LINK};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn default_user_agent() -> String {
    format!("mastoblock/{}", env!("CARGO_PKG_VERSION"))
}

pub(crate) fn build_http(timeout: Duration, user_agent: &str) -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .gzip(true)
        .build()
        .map_err(|e| SyncError::Config(format!("failed to build HTTP client: {e}")))
}

/// Validate an absolute http(s) URL, returning it without a trailing slash
pub(crate) fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw).map_err(|e| SyncError::InvalidUrl(format!("{raw}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(SyncError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{other}'"
        ))),
    }
}

pub(crate) fn transport_error(err: &reqwest::Error, timeout: Duration) -> SyncError {
    if err.is_timeout() {
        SyncError::Timeout(timeout)
    } else {
        SyncError::Http(err.to_string())
    }
}

/// Query string of the `rel="next"` target in a `Link` header.
///
/// Only the query is kept so the next page is always requested from the
/// configured base URL, whatever host the instance advertises.
pub(crate) fn next_page_query(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        let is_next = params
            .split(';')
            .map(str::trim)
            .any(|param| param == r#"rel="next""# || param == "rel=next");
        if !is_next {
            return None;
        }

        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        url::Url::parse(target).ok()?.query().map(String::from)
    })
}

/// Decode a JSON body from a successful response, or map the error status
pub(crate) async fn json_response<T: DeserializeOwned>(
    response: reqwest::Response,
    timeout: Duration,
) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&e, timeout))?;
        serde_json::from_str(&body).map_err(SyncError::Json)
    } else {
        Err(error_response(status.as_u16(), response).await)
    }
}

/// Accept any 2xx response, discarding the body
pub(crate) async fn empty_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(error_response(status.as_u16(), response).await)
    }
}

/// Convert an error response into a [`SyncError`] carrying the body text
async fn error_response(status: u16, response: reqwest::Response) -> SyncError {
    let body = response.text().await.unwrap_or_default();

    // Mastodon reports failures as {"error": "..."}
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);

    match status {
        401 | 403 => {
            warn!(status, %message, "Request rejected by the instance");
            SyncError::Unauthorized {
                code: status,
                message,
            }
        }
        _ => SyncError::Api {
            code: status,
            message,
        },
    }
}
