//! Reqwest-backed social source adapter for the Reddit API.
//!
//! Uses the application-only OAuth flow: a client-credentials token is
//! fetched from the public host and cached until shortly before expiry,
//! then listings are read from the OAuth host.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{map_status_error, map_transport_error, AdapterBuildError};
use crate::domain::ports::{RawPost, SocialSort, SocialSource, UpstreamFailure};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const OAUTH_BASE: &str = "https://oauth.reddit.com/";
const USER_AGENT: &str = "mosaic-backend/0.1";
/// Tokens are refreshed this long before their reported expiry.
const EXPIRY_MARGIN_SECONDS: i64 = 60;

/// Application credentials for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
}

struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

pub struct RedditSocialSource {
    client: Client,
    base: Url,
    credentials: Option<RedditCredentials>,
    token: Mutex<Option<CachedToken>>,
}

impl RedditSocialSource {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// base URL is invalid.
    pub fn new(
        credentials: Option<RedditCredentials>,
        timeout: Duration,
    ) -> Result<Self, AdapterBuildError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base: Url::parse(OAUTH_BASE)?,
            credentials,
            token: Mutex::new(None),
        })
    }

    async fn access_token(&self) -> Result<String, UpstreamFailure> {
        let Some(credentials) = &self.credentials else {
            return Err(UpstreamFailure::missing_credential(
                "no Reddit client credentials configured",
            ));
        };

        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Utc::now() {
                return Ok(token.access_token.clone());
            }
        }

        let response = self
            .client
            .post(TOKEN_URL)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        let token: TokenDto = serde_json::from_slice(&body)
            .map_err(|error| UpstreamFailure::decode(format!("invalid token payload: {error}")))?;

        let expires_at = Utc::now()
            + chrono::Duration::seconds((token.expires_in - EXPIRY_MARGIN_SECONDS).max(0));
        *cached = Some(CachedToken {
            access_token: token.access_token.clone(),
            expires_at,
        });
        Ok(token.access_token)
    }
}

#[async_trait]
impl SocialSource for RedditSocialSource {
    async fn posts(
        &self,
        subreddit: &str,
        sort: SocialSort,
        limit: usize,
    ) -> Result<Vec<RawPost>, UpstreamFailure> {
        let token = self.access_token().await?;
        let mut url = self
            .base
            .join(&format!("r/{subreddit}/{}", sort.as_str()))
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("limit", &limit.to_string())
                .append_pair("raw_json", "1");
            if sort == SocialSort::Top {
                pairs.append_pair("t", "day");
            }
        }

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        let listing: ListingDto = serde_json::from_slice(&body)
            .map_err(|error| UpstreamFailure::decode(format!("invalid listing payload: {error}")))?;
        Ok(listing.into_raw())
    }
}

#[derive(Debug, Deserialize)]
struct TokenDto {
    access_token: String,
    #[serde(default)]
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct ListingDto {
    data: Option<ListingDataDto>,
}

#[derive(Debug, Deserialize)]
struct ListingDataDto {
    #[serde(default)]
    children: Vec<ChildDto>,
}

#[derive(Debug, Deserialize)]
struct ChildDto {
    data: Option<PostDto>,
}

#[derive(Debug, Deserialize)]
struct PostDto {
    id: Option<String>,
    title: Option<String>,
    selftext: Option<String>,
    permalink: Option<String>,
    subreddit: Option<String>,
    author: Option<String>,
    score: Option<i64>,
    num_comments: Option<i64>,
    created_utc: Option<f64>,
}

impl ListingDto {
    fn into_raw(self) -> Vec<RawPost> {
        self.data
            .map(|data| data.children)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|child| child.data)
            .map(|post| RawPost {
                id: post.id,
                title: post.title,
                body: post.selftext,
                permalink: post.permalink,
                subreddit: post.subreddit,
                author: post.author,
                score: post.score,
                comments: post.num_comments,
                created_utc: post.created_utc,
            })
            .collect()
    }
}
