//! Port for the job board provider.

use async_trait::async_trait;

use super::UpstreamFailure;

/// One advert as the provider reports it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawJob {
    pub id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub url: Option<String>,
    pub created: Option<String>,
}

/// Search live job adverts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, what: &str, limit: usize) -> Result<Vec<RawJob>, UpstreamFailure>;
}
