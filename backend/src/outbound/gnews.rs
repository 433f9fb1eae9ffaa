//! Reqwest-backed news source adapter for the GNews API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{get_json, AdapterBuildError};
use crate::domain::ports::{NewsSource, RawArticle, UpstreamFailure};

const DEFAULT_BASE: &str = "https://gnews.io/api/v4/";

pub struct GnewsNewsSource {
    client: Client,
    base: Url,
    api_key: Option<String>,
}

impl GnewsNewsSource {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// base URL is invalid.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, AdapterBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: Url::parse(DEFAULT_BASE)?,
            api_key,
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, UpstreamFailure> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| UpstreamFailure::missing_credential("no GNews API key configured"))?;
        let mut url = self
            .base
            .join(path)
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("lang", "en")
            .append_pair("apikey", api_key);
        Ok(url)
    }
}

#[async_trait]
impl NewsSource for GnewsNewsSource {
    async fn top_headlines(
        &self,
        topic: &str,
        limit: usize,
    ) -> Result<Vec<RawArticle>, UpstreamFailure> {
        let url = self.endpoint(
            "top-headlines",
            &[("category", topic), ("max", &limit.to_string())],
        )?;
        let response: ResponseDto = get_json(&self.client, url).await?;
        Ok(response.into_raw())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawArticle>, UpstreamFailure> {
        let url = self.endpoint("search", &[("q", query), ("max", &limit.to_string())])?;
        let response: ResponseDto = get_json(&self.client, url).await?;
        Ok(response.into_raw())
    }
}

#[derive(Debug, Deserialize)]
struct ResponseDto {
    #[serde(default)]
    articles: Vec<ArticleDto>,
}

#[derive(Debug, Deserialize)]
struct ArticleDto {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<SourceDto>,
}

#[derive(Debug, Deserialize)]
struct SourceDto {
    name: Option<String>,
}

impl ResponseDto {
    fn into_raw(self) -> Vec<RawArticle> {
        self.articles
            .into_iter()
            .map(|article| RawArticle {
                title: article.title,
                description: article.description,
                url: article.url,
                source: article.source.and_then(|source| source.name),
                image_url: article.image,
                published_at: article.published_at,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_headline_payload() {
        let payload = serde_json::json!({
            "totalArticles": 1,
            "articles": [{
                "title": "Fusion milestone",
                "description": "Net gain reported.",
                "url": "https://example.com/fusion",
                "image": "https://example.com/fusion.jpg",
                "publishedAt": "2025-06-01T10:00:00Z",
                "source": { "name": "Example Wire", "url": "https://example.com" }
            }]
        });
        let response: ResponseDto = serde_json::from_value(payload).expect("parse");
        let raw = response.into_raw();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].source.as_deref(), Some("Example Wire"));
        assert_eq!(raw[0].url.as_deref(), Some("https://example.com/fusion"));
    }

    #[test]
    fn tolerates_missing_article_fields() {
        let payload = serde_json::json!({ "articles": [{}] });
        let response: ResponseDto = serde_json::from_value(payload).expect("parse");
        let raw = response.into_raw();
        assert_eq!(raw[0].title, None);
        assert_eq!(raw[0].source, None);
    }

    #[tokio::test]
    async fn fails_fast_without_a_key() {
        let source = GnewsNewsSource::new(None, Duration::from_secs(1)).expect("build");
        let err = source
            .top_headlines("technology", 5)
            .await
            .expect_err("no key");
        assert!(matches!(err, UpstreamFailure::MissingCredential { .. }));
    }

    #[test]
    fn tolerates_an_empty_payload() {
        let response: ResponseDto = serde_json::from_value(serde_json::json!({})).expect("parse");
        assert!(response.into_raw().is_empty());
    }
}
