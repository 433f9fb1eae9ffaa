//! Port for the social feed provider.

use async_trait::async_trait;

use super::UpstreamFailure;

/// Listing sorts supported by the social provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialSort {
    Hot,
    New,
    Rising,
    Top,
}

impl SocialSort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::New => "new",
            Self::Rising => "rising",
            Self::Top => "top",
        }
    }

    /// All sorts, in the order variety selection indexes them.
    pub const ALL: [Self; 4] = [Self::Hot, Self::New, Self::Rising, Self::Top];
}

/// One submission as the provider reports it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub permalink: Option<String>,
    pub subreddit: Option<String>,
    pub author: Option<String>,
    pub score: Option<i64>,
    pub comments: Option<i64>,
    pub created_utc: Option<f64>,
}

/// Fetch a subreddit listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialSource: Send + Sync {
    async fn posts(
        &self,
        subreddit: &str,
        sort: SocialSort,
        limit: usize,
    ) -> Result<Vec<RawPost>, UpstreamFailure>;
}
