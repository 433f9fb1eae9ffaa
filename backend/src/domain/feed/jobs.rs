//! Job feed aggregation.

use std::sync::Arc;

use futures_util::future::join_all;

use crate::domain::feed::preferences_for;
use crate::domain::normalize;
use crate::domain::ports::{JobSource, PreferenceStore, UpstreamFailure};
use crate::domain::{mock, Category, CategoryPreferences, Envelope, JobListing, UserId};

const RESULT_LIMIT: usize = 10;
const TRENDING_LIMIT: usize = 4;
const TRENDING_CATEGORIES: [&str; 3] = ["technology", "finance", "marketing"];

/// Advisory attached when listings are synthetic because no provider
/// credential is configured.
const CREDENTIAL_ADVISORY: &str = "configure job search credentials for live listings";

pub struct JobFeedService {
    source: Arc<dyn JobSource>,
    preferences: Arc<dyn PreferenceStore>,
}

impl JobFeedService {
    pub fn new(source: Arc<dyn JobSource>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self {
            source,
            preferences,
        }
    }

    /// Listings for the caller's first preferred job category.
    pub async fn personalised(&self, user: Option<&UserId>) -> Envelope<JobListing> {
        let prefs = preferences_for(self.preferences.as_ref(), user, Category::Jobs).await;
        let category = match prefs {
            CategoryPreferences::Jobs { categories } => categories
                .into_iter()
                .next()
                .unwrap_or_else(|| "technology".to_owned()),
            _ => "technology".to_owned(),
        };
        self.fetch(&category).await.with_category(&category)
    }

    /// Free-text listing search.
    pub async fn search(&self, query: &str) -> Envelope<JobListing> {
        self.fetch(query).await.with_query(query)
    }

    /// Listings across a fixed set of hiring categories, each fetched
    /// independently and backfilled with synthetic listings on failure.
    pub async fn trending(&self) -> Envelope<JobListing> {
        let calls = TRENDING_CATEGORIES
            .iter()
            .map(|category| self.source.search(category, TRENDING_LIMIT));
        let results = join_all(calls).await;

        let mut items = Vec::new();
        let mut failed = Vec::new();
        for (category, result) in TRENDING_CATEGORIES.iter().zip(results) {
            match result {
                Ok(raw) => items.extend(normalize::jobs::listings(raw, category)),
                Err(err) => {
                    tracing::warn!(category, error = %err, "trending job category failed");
                    failed.push(*category);
                    items.extend(mock::jobs(category));
                }
            }
        }

        if failed.len() == TRENDING_CATEGORIES.len() {
            return Envelope::mock(items, Some("all job categories failed".to_owned()));
        }
        let envelope = Envelope::real(items);
        if failed.is_empty() {
            envelope
        } else {
            envelope.with_error(format!("some categories unavailable: {}", failed.join(", ")))
        }
    }

    async fn fetch(&self, what: &str) -> Envelope<JobListing> {
        match self.source.search(what, RESULT_LIMIT).await {
            Ok(raw) => Envelope::real(normalize::jobs::listings(raw, what)),
            Err(err @ UpstreamFailure::MissingCredential { .. }) => {
                tracing::info!(what, "job provider not configured; serving synthetic listings");
                Envelope::mock(mock::jobs(what), Some(err.to_string()))
                    .with_message(CREDENTIAL_ADVISORY)
            }
            Err(err) => {
                tracing::warn!(what, error = %err, "job search failed");
                Envelope::mock(mock::jobs(what), Some(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::ports::{FixturePreferenceStore, MockJobSource, RawJob};

    fn raw(id: &str) -> RawJob {
        RawJob {
            id: Some(id.to_owned()),
            title: Some("Engineer".to_owned()),
            ..RawJob::default()
        }
    }

    fn service(source: MockJobSource) -> JobFeedService {
        JobFeedService::new(Arc::new(source), Arc::new(FixturePreferenceStore))
    }

    #[tokio::test]
    async fn personalised_search_uses_the_first_preferred_category() {
        let mut source = MockJobSource::new();
        source
            .expect_search()
            .with(eq("technology"), eq(RESULT_LIMIT))
            .times(1)
            .returning(|_, _| Ok(vec![raw("1")]));

        let envelope = service(source).personalised(None).await;
        assert!(!envelope.is_mock);
        assert_eq!(envelope.category.as_deref(), Some("technology"));
    }

    #[tokio::test]
    async fn missing_credentials_serve_synthetic_listings_with_an_advisory() {
        let mut source = MockJobSource::new();
        source
            .expect_search()
            .returning(|_, _| Err(UpstreamFailure::missing_credential("no app id")));

        let envelope = service(source).search("rust").await;
        assert!(envelope.is_mock);
        assert_eq!(envelope.message.as_deref(), Some(CREDENTIAL_ADVISORY));
        assert!(envelope.count >= 1);
        assert_eq!(envelope.query.as_deref(), Some("rust"));
    }

    #[tokio::test]
    async fn trending_backfills_failed_categories() {
        let mut source = MockJobSource::new();
        source
            .expect_search()
            .with(eq("finance"), eq(TRENDING_LIMIT))
            .returning(|_, _| Err(UpstreamFailure::timeout("slow")));
        for category in ["technology", "marketing"] {
            source
                .expect_search()
                .with(eq(category), eq(TRENDING_LIMIT))
                .returning(|_, _| Ok(vec![raw("1")]));
        }

        let envelope = service(source).trending().await;
        assert!(!envelope.is_mock);
        let synthetic: Vec<_> = envelope
            .items
            .iter()
            .filter(|listing| listing.is_static)
            .collect();
        assert!(synthetic.iter().all(|listing| listing.category == "finance"));
    }
}
