//! Reqwest-backed video source adapter for the YouTube Data API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{get_json, AdapterBuildError};
use crate::domain::ports::{RawVideo, UpstreamFailure, VideoOrder, VideoSource};

const DEFAULT_BASE: &str = "https://www.googleapis.com/youtube/v3/";
/// Only videos published in this window are returned.
const RECENCY_DAYS: i64 = 30;

pub struct YoutubeVideoSource {
    client: Client,
    base: Url,
    api_key: Option<String>,
}

impl YoutubeVideoSource {
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
}

#[async_trait]
impl VideoSource for YoutubeVideoSource {
    async fn search(
        &self,
        query: &str,
        order: VideoOrder,
        limit: usize,
    ) -> Result<Vec<RawVideo>, UpstreamFailure> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| UpstreamFailure::missing_credential("no YouTube API key configured"))?;
        let published_after = (Utc::now() - chrono::Duration::days(RECENCY_DAYS))
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();
        let mut url = self
            .base
            .join("search")
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        url.query_pairs_mut()
            .append_pair("part", "snippet")
            .append_pair("q", query)
            .append_pair("type", "video")
            .append_pair("order", order.as_str())
            .append_pair("maxResults", &limit.to_string())
            .append_pair("publishedAfter", &published_after)
            .append_pair("key", api_key);

        let response: SearchResponseDto = get_json(&self.client, url).await?;
        Ok(response.into_raw())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    #[serde(default)]
    items: Vec<ItemDto>,
}

#[derive(Debug, Deserialize)]
struct ItemDto {
    id: Option<IdDto>,
    snippet: Option<SnippetDto>,
}

#[derive(Debug, Deserialize)]
struct IdDto {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SnippetDto {
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "channelTitle")]
    channel_title: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    thumbnails: Option<ThumbnailsDto>,
}

#[derive(Debug, Deserialize)]
struct ThumbnailsDto {
    medium: Option<ThumbnailDto>,
    default: Option<ThumbnailDto>,
}

#[derive(Debug, Deserialize)]
struct ThumbnailDto {
    url: Option<String>,
}

impl SearchResponseDto {
    fn into_raw(self) -> Vec<RawVideo> {
        self.items
            .into_iter()
            .map(|item| {
                let snippet = item.snippet;
                let thumbnail = snippet.as_ref().and_then(|snippet| {
                    let thumbs = snippet.thumbnails.as_ref()?;
                    thumbs
                        .medium
                        .as_ref()
                        .or(thumbs.default.as_ref())
                        .and_then(|thumb| thumb.url.clone())
                });
                RawVideo {
                    id: item.id.and_then(|id| id.video_id),
                    title: snippet.as_ref().and_then(|s| s.title.clone()),
                    description: snippet.as_ref().and_then(|s| s.description.clone()),
                    thumbnail_url: thumbnail,
                    channel: snippet.as_ref().and_then(|s| s.channel_title.clone()),
                    published_at: snippet.and_then(|s| s.published_at),
                }
            })
            .collect()
    }
}
