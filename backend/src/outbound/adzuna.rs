//! Reqwest-backed job source adapter for the Adzuna API.
//!
//! Adzuna requires an application id and key pair; without both the
//! adapter reports a missing credential so the feed serves synthetic
//! listings with an advisory instead.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use super::{get_json, AdapterBuildError};
use crate::domain::ports::{JobSource, RawJob, UpstreamFailure};

const DEFAULT_BASE: &str = "https://api.adzuna.com/v1/api/";
const COUNTRY: &str = "gb";

/// Application credentials for Adzuna.
#[derive(Debug, Clone)]
pub struct AdzunaCredentials {
    pub app_id: String,
    pub app_key: String,
}

pub struct AdzunaJobSource {
    client: Client,
    base: Url,
    credentials: Option<AdzunaCredentials>,
}

impl AdzunaJobSource {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// base URL is invalid.
    pub fn new(
        credentials: Option<AdzunaCredentials>,
        timeout: Duration,
    ) -> Result<Self, AdapterBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: Url::parse(DEFAULT_BASE)?,
            credentials,
        })
    }
}

#[async_trait]
impl JobSource for AdzunaJobSource {
    async fn search(&self, what: &str, limit: usize) -> Result<Vec<RawJob>, UpstreamFailure> {
        let Some(credentials) = &self.credentials else {
            return Err(UpstreamFailure::missing_credential(
                "no Adzuna application credentials configured",
            ));
        };
        let mut url = self
            .base
            .join(&format!("jobs/{COUNTRY}/search/1"))
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        url.query_pairs_mut()
            .append_pair("app_id", &credentials.app_id)
            .append_pair("app_key", &credentials.app_key)
            .append_pair("what", what)
            .append_pair("results_per_page", &limit.to_string())
            .append_pair("content-type", "application/json");

        let response: SearchResponseDto = get_json(&self.client, url).await?;
        Ok(response.results.into_iter().map(JobDto::into_raw).collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    #[serde(default)]
    results: Vec<JobDto>,
}

#[derive(Debug, Deserialize)]
struct JobDto {
    /// Numeric in some responses, string in others.
    id: Option<Value>,
    title: Option<String>,
    company: Option<CompanyDto>,
    location: Option<LocationDto>,
    description: Option<String>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    redirect_url: Option<String>,
    created: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompanyDto {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocationDto {
    display_name: Option<String>,
}

impl JobDto {
    fn into_raw(self) -> RawJob {
        let id = self.id.and_then(|id| match id {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        });
        RawJob {
            id,
            title: self.title,
            company: self.company.and_then(|company| company.display_name),
            location: self.location.and_then(|location| location.display_name),
            description: self.description,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            url: self.redirect_url,
            created: self.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_search_payload_with_numeric_ids() {
        let payload = serde_json::json!({
            "count": 1,
            "results": [{
                "id": 4321,
                "title": "Backend Engineer",
                "company": { "display_name": "Acme" },
                "location": { "display_name": "London, UK" },
                "description": "Build services.",
                "salary_min": 60000.0,
                "salary_max": 80000.0,
                "redirect_url": "https://example.com/job/4321",
                "created": "2025-06-01T00:00:00Z"
            }]
        });
        let dto: SearchResponseDto = serde_json::from_value(payload).expect("parse");
        let raw = dto.results.into_iter().next().expect("row").into_raw();
        assert_eq!(raw.id.as_deref(), Some("4321"));
        assert_eq!(raw.company.as_deref(), Some("Acme"));
        assert_eq!(raw.salary_max, Some(80_000.0));
    }

    #[tokio::test]
    async fn missing_credentials_fail_fast_without_io() {
        let source = AdzunaJobSource::new(None, Duration::from_secs(5)).expect("build");
        let err = source.search("rust", 10).await.expect_err("no credentials");
        assert!(matches!(err, UpstreamFailure::MissingCredential { .. }));
    }
}
