//! Port for the video provider.

use async_trait::async_trait;

use super::UpstreamFailure;

/// Sort orders the video provider accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoOrder {
    Date,
    Relevance,
    ViewCount,
}

impl VideoOrder {
    /// Provider query value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Relevance => "relevance",
            Self::ViewCount => "viewCount",
        }
    }
}

/// One video search hit before normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawVideo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub channel: Option<String>,
    pub published_at: Option<String>,
}

/// Search recent videos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn search(
        &self,
        query: &str,
        order: VideoOrder,
        limit: usize,
    ) -> Result<Vec<RawVideo>, UpstreamFailure>;
}
