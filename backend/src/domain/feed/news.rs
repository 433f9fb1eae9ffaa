//! News aggregation.

use std::sync::Arc;

use futures_util::future::join_all;

use crate::domain::feed::preferences_for;
use crate::domain::normalize;
use crate::domain::ports::{NewsSource, PreferenceStore};
use crate::domain::vocabulary::VocabularyTables;
use crate::domain::{mock, Article, Category, CategoryPreferences, Envelope, UserId};

/// Per-category article limit for the personalised feed.
const PER_CATEGORY: usize = 5;
/// Result limit for free-text search.
const SEARCH_LIMIT: usize = 20;
/// Upper bound on categories fetched per request; extra preferences are
/// ignored rather than fanned out.
const CATEGORY_CAP: usize = 8;

/// Categories used by the trending view, which ignores preferences.
const TRENDING_CATEGORIES: [&str; 4] = ["technology", "business", "entertainment", "sports"];

pub struct NewsFeedService {
    source: Arc<dyn NewsSource>,
    preferences: Arc<dyn PreferenceStore>,
    vocabulary: Arc<VocabularyTables>,
}

impl NewsFeedService {
    pub fn new(
        source: Arc<dyn NewsSource>,
        preferences: Arc<dyn PreferenceStore>,
        vocabulary: Arc<VocabularyTables>,
    ) -> Self {
        Self {
            source,
            preferences,
            vocabulary,
        }
    }

    /// Headlines across the caller's preferred categories.
    ///
    /// Each category is fetched independently; categories that fail are
    /// noted on the envelope while the survivors keep the response real.
    /// Only when every category fails does the feed go fully synthetic.
    pub async fn personalised(&self, user: Option<&UserId>) -> Envelope<Article> {
        let prefs = preferences_for(self.preferences.as_ref(), user, Category::News).await;
        let categories = match prefs {
            CategoryPreferences::News { categories } if !categories.is_empty() => categories,
            _ => vec!["general".to_owned()],
        };
        let mut slugs = self.vocabulary.news_slugs(&categories);
        slugs.truncate(CATEGORY_CAP);

        let calls = slugs
            .iter()
            .map(|slug| self.source.top_headlines(slug, PER_CATEGORY));
        let results = join_all(calls).await;

        let mut items = Vec::new();
        let mut failed = Vec::new();
        for (slug, result) in slugs.iter().zip(results) {
            match result {
                Ok(raw) => items.extend(normalize::news::articles(raw, slug)),
                Err(err) => {
                    tracing::warn!(category = %slug, error = %err, "news category failed");
                    failed.push(slug.clone());
                }
            }
        }

        if failed.len() == slugs.len() {
            let synthetic = slugs.iter().flat_map(|slug| mock::news(slug)).collect();
            return Envelope::mock(
                synthetic,
                Some(format!("all news categories failed: {}", failed.join(", "))),
            );
        }
        let envelope = Envelope::real(items);
        if failed.is_empty() {
            envelope
        } else {
            envelope.with_error(format!("some categories unavailable: {}", failed.join(", ")))
        }
    }

    /// Fixed-category trending headlines; preference-independent.
    ///
    /// Failed categories are backfilled with synthetic articles so the
    /// view always covers all four sections.
    pub async fn trending(&self) -> Envelope<Article> {
        let calls = TRENDING_CATEGORIES
            .iter()
            .map(|category| self.source.top_headlines(category, PER_CATEGORY));
        let results = join_all(calls).await;

        let mut items = Vec::new();
        let mut failed = Vec::new();
        for (category, result) in TRENDING_CATEGORIES.iter().zip(results) {
            match result {
                Ok(raw) => items.extend(normalize::news::articles(raw, category)),
                Err(err) => {
                    tracing::warn!(category, error = %err, "trending category failed");
                    failed.push(*category);
                    items.extend(mock::news(category));
                }
            }
        }

        if failed.len() == TRENDING_CATEGORIES.len() {
            return Envelope::mock(items, Some("all trending categories failed".to_owned()));
        }
        let envelope = Envelope::real(items);
        if failed.is_empty() {
            envelope
        } else {
            envelope.with_error(format!("some categories unavailable: {}", failed.join(", ")))
        }
    }

    /// Free-text article search. The query must be validated non-empty by
    /// the caller; an upstream failure degrades to synthetic results.
    pub async fn search(&self, query: &str) -> Envelope<Article> {
        match self.source.search(query, SEARCH_LIMIT).await {
            Ok(raw) => {
                Envelope::real(normalize::news::articles(raw, "search")).with_query(query)
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "news search failed");
                Envelope::mock(mock::news(query), Some(err.to_string())).with_query(query)
            }
        }
    }
}
