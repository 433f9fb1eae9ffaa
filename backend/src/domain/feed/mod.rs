//! Feed services: one orchestrator per content domain.
//!
//! Every aggregation entry point follows the same pipeline: load the
//! caller's stored preferences (or defaults), translate preference terms
//! into the provider's vocabulary, call the upstream, normalise the
//! payload, and on any upstream failure substitute synthetic content.
//! The pipeline is total: an aggregation call never surfaces an upstream
//! error to the caller.

mod jobs;
mod market;
mod movies;
mod news;
mod recipes;
mod social;
mod videos;
mod weather;

pub use jobs::JobFeedService;
pub use market::MarketFeedService;
pub use movies::MovieFeedService;
pub use news::NewsFeedService;
pub use recipes::RecipeFeedService;
pub use social::SocialFeedService;
pub use videos::VideoFeedService;
pub use weather::WeatherService;

use crate::domain::ports::PreferenceStore;
use crate::domain::{Category, CategoryPreferences, UserId};

/// Load one category's preferences for an optional caller identity.
///
/// Anonymous callers, absent documents, and store failures all resolve to
/// the category defaults; preference loading never fails an aggregation.
pub(crate) async fn preferences_for(
    store: &dyn PreferenceStore,
    user: Option<&UserId>,
    category: Category,
) -> CategoryPreferences {
    let Some(user) = user else {
        return CategoryPreferences::default_for(category);
    };
    match store.get(user, category).await {
        Ok(Some(document)) => document.preferences,
        Ok(None) => CategoryPreferences::default_for(category),
        Err(err) => {
            tracing::warn!(
                category = %category,
                error = %err,
                "preference lookup failed; using defaults"
            );
            CategoryPreferences::default_for(category)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{MockPreferenceStore, PreferenceStoreError};
    use crate::domain::PreferenceDocument;

    #[tokio::test]
    async fn anonymous_callers_get_defaults_without_a_store_call() {
        let mut store = MockPreferenceStore::new();
        store.expect_get().never();
        let prefs = preferences_for(&store, None, Category::News).await;
        assert_eq!(prefs, CategoryPreferences::default_for(Category::News));
    }

    #[tokio::test]
    async fn store_failures_resolve_to_defaults() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .returning(|_, _| Err(PreferenceStoreError::unavailable("down")));
        let user = UserId::random();
        let prefs = preferences_for(&store, Some(&user), Category::Food).await;
        assert_eq!(prefs, CategoryPreferences::default_for(Category::Food));
    }

    #[tokio::test]
    async fn stored_documents_win_over_defaults() {
        let user = UserId::random();
        let stored = CategoryPreferences::News {
            categories: vec!["science".to_owned()],
        };
        let stored_clone = stored.clone();
        let mut store = MockPreferenceStore::new();
        store.expect_get().returning(move |user_id, _| {
            Ok(Some(PreferenceDocument::new(
                user_id.clone(),
                stored_clone.clone(),
            )))
        });
        let store: Arc<dyn PreferenceStore> = Arc::new(store);
        let prefs = preferences_for(store.as_ref(), Some(&user), Category::News).await;
        assert_eq!(prefs, stored);
    }
}
