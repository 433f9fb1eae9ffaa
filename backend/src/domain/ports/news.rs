//! Port for the news provider.

use async_trait::async_trait;

use super::UpstreamFailure;

/// One article as the provider returned it, before normalisation.
///
/// Every field is optional; the normaliser substitutes documented defaults
/// so schema drift upstream never aborts a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<String>,
}

/// Fetch raw articles from the news provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Top headlines for one topic slug.
    async fn top_headlines(
        &self,
        topic: &str,
        limit: usize,
    ) -> Result<Vec<RawArticle>, UpstreamFailure>;

    /// Full-text search across recent articles.
    async fn search(&self, query: &str, limit: usize)
        -> Result<Vec<RawArticle>, UpstreamFailure>;
}
