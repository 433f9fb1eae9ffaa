//! Outbound adapters: one reqwest-backed source per upstream provider,
//! plus the in-memory preference store.
//!
//! Adapters own transport details only: URL construction, timeouts,
//! status and decode error mapping into [`UpstreamFailure`], and DTO
//! conversion into the port's raw types. No fallback logic lives here.

pub mod adzuna;
pub mod coingecko;
pub mod gnews;
pub mod mealdb;
pub mod memory;
pub mod openweather;
pub mod reddit;
pub mod tmdb;
pub mod wttr;
pub mod youtube;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::domain::ports::UpstreamFailure;

/// Failure constructing an adapter at startup.
#[derive(Debug, thiserror::Error)]
pub enum AdapterBuildError {
    #[error("failed to construct HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

pub(crate) fn map_transport_error(error: reqwest::Error) -> UpstreamFailure {
    if error.is_timeout() {
        UpstreamFailure::timeout(error.to_string())
    } else {
        UpstreamFailure::transport(error.to_string())
    }
}

pub(crate) fn map_status_error(status: StatusCode, body: &[u8]) -> UpstreamFailure {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        preview
    };
    UpstreamFailure::status(status.as_u16(), message)
}

/// Issue a GET and decode the JSON body, with uniform error mapping.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
) -> Result<T, UpstreamFailure> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, &body));
    }
    serde_json::from_slice(&body)
        .map_err(|error| UpstreamFailure::decode(format!("invalid JSON payload: {error}")))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_carry_the_code_and_a_compact_preview() {
        let failure = map_status_error(
            StatusCode::SERVICE_UNAVAILABLE,
            b"upstream\n  is   down",
        );
        assert_eq!(
            failure,
            UpstreamFailure::status(503, "upstream is down")
        );
    }

    #[test]
    fn long_bodies_are_previewed_not_echoed() {
        let body = "x".repeat(500);
        let failure = map_status_error(StatusCode::BAD_GATEWAY, body.as_bytes());
        let UpstreamFailure::Status { message, .. } = failure else {
            panic!("expected status failure");
        };
        assert!(message.chars().count() <= 163);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn empty_bodies_fall_back_to_the_status_line() {
        let failure = map_status_error(StatusCode::NOT_FOUND, b"");
        assert_eq!(failure, UpstreamFailure::status(404, "status 404"));
    }
}
