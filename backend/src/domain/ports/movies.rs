//! Port for the movie catalogue provider.

use async_trait::async_trait;

use super::UpstreamFailure;

/// One discovery result before normalisation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMovie {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

/// Discover movies by genre.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn discover(
        &self,
        genre_ids: &[u32],
        limit: usize,
    ) -> Result<Vec<RawMovie>, UpstreamFailure>;
}
