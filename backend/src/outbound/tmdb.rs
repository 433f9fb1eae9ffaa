//! Reqwest-backed movie source adapter for The Movie Database.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{get_json, AdapterBuildError};
use crate::domain::ports::{MovieSource, RawMovie, UpstreamFailure};

const DEFAULT_BASE: &str = "https://api.themoviedb.org/3/";

pub struct TmdbMovieSource {
    client: Client,
    base: Url,
    api_key: Option<String>,
}

impl TmdbMovieSource {
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
impl MovieSource for TmdbMovieSource {
    async fn discover(
        &self,
        genre_ids: &[u32],
        limit: usize,
    ) -> Result<Vec<RawMovie>, UpstreamFailure> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| UpstreamFailure::missing_credential("no TMDB API key configured"))?;
        let with_genres = genre_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let mut url = self
            .base
            .join("discover/movie")
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        url.query_pairs_mut()
            .append_pair("api_key", api_key)
            .append_pair("with_genres", &with_genres)
            .append_pair("sort_by", "popularity.desc")
            .append_pair("language", "en-US");

        let response: DiscoverResponseDto = get_json(&self.client, url).await?;
        Ok(response
            .results
            .into_iter()
            .take(limit)
            .map(MovieDto::into_raw)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct DiscoverResponseDto {
    #[serde(default)]
    results: Vec<MovieDto>,
}

#[derive(Debug, Deserialize)]
struct MovieDto {
    id: Option<i64>,
    title: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f64>,
}

impl MovieDto {
    fn into_raw(self) -> RawMovie {
        RawMovie {
            id: self.id,
            title: self.title,
            overview: self.overview,
            poster_path: self.poster_path,
            release_date: self.release_date,
            vote_average: self.vote_average,
        }
    }
}
