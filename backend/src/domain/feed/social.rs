//! Social feed aggregation.

use std::sync::Arc;

use futures_util::future::join_all;

use crate::domain::feed::preferences_for;
use crate::domain::normalize;
use crate::domain::ports::{PreferenceStore, SocialSort, SocialSource};
use crate::domain::variety::{pick_from, Variety};
use crate::domain::vocabulary::VocabularyTables;
use crate::domain::{mock, Category, CategoryPreferences, Envelope, Post, UserId};

const FEED_LIMIT: usize = 10;
const FEED_BODY_LIMIT: usize = 200;

/// The trending view is denser, so bodies are cut shorter and each
/// community contributes fewer posts.
const TRENDING_LIMIT: usize = 2;
const TRENDING_BODY_LIMIT: usize = 150;
const TRENDING_SUBREDDITS: [&str; 5] = [
    "technology",
    "programming",
    "science",
    "worldnews",
    "todayilearned",
];

pub struct SocialFeedService {
    source: Arc<dyn SocialSource>,
    preferences: Arc<dyn PreferenceStore>,
    vocabulary: Arc<VocabularyTables>,
    variety: Arc<dyn Variety>,
}

impl SocialFeedService {
    pub fn new(
        source: Arc<dyn SocialSource>,
        preferences: Arc<dyn PreferenceStore>,
        vocabulary: Arc<VocabularyTables>,
        variety: Arc<dyn Variety>,
    ) -> Self {
        Self {
            source,
            preferences,
            vocabulary,
            variety,
        }
    }

    /// Posts from one community: an explicit `subreddit` parameter wins,
    /// otherwise one of the caller's preferred topics is picked. The sort
    /// order rotates through the variety seam.
    pub async fn feed(&self, user: Option<&UserId>, subreddit: Option<&str>) -> Envelope<Post> {
        let subreddit = match subreddit {
            Some(name) => name.to_owned(),
            None => {
                let prefs =
                    preferences_for(self.preferences.as_ref(), user, Category::Social).await;
                let topics = match prefs {
                    CategoryPreferences::Social { subreddits } if !subreddits.is_empty() => {
                        subreddits
                    }
                    _ => vec!["technology".to_owned()],
                };
                let names = self.vocabulary.subreddit_names(&topics);
                pick_from(self.variety.as_ref(), &names)
                    .cloned()
                    .unwrap_or_else(|| "technology".to_owned())
            }
        };
        let sort = pick_from(self.variety.as_ref(), &SocialSort::ALL)
            .copied()
            .unwrap_or(SocialSort::Hot);

        match self.source.posts(&subreddit, sort, FEED_LIMIT).await {
            Ok(raw) => {
                Envelope::real(normalize::social::posts(raw, &subreddit, FEED_BODY_LIMIT))
                    .with_subreddit(&subreddit)
            }
            Err(err) => {
                tracing::warn!(subreddit = %subreddit, error = %err, "social feed failed");
                Envelope::mock(mock::posts(&subreddit), Some(err.to_string()))
                    .with_subreddit(&subreddit)
            }
        }
    }

    /// Top posts across a fixed set of large communities. Each community
    /// is fetched independently and backfilled with synthetic posts when
    /// its fetch fails.
    pub async fn trending(&self) -> Envelope<Post> {
        let calls = TRENDING_SUBREDDITS
            .iter()
            .map(|subreddit| self.source.posts(subreddit, SocialSort::Hot, TRENDING_LIMIT));
        let results = join_all(calls).await;

        let mut items = Vec::new();
        let mut failed = Vec::new();
        for (subreddit, result) in TRENDING_SUBREDDITS.iter().zip(results) {
            match result {
                Ok(raw) => {
                    items.extend(normalize::social::posts(raw, subreddit, TRENDING_BODY_LIMIT));
                }
                Err(err) => {
                    tracing::warn!(subreddit, error = %err, "trending community failed");
                    failed.push(*subreddit);
                    items.extend(mock::posts(subreddit).into_iter().take(TRENDING_LIMIT));
                }
            }
        }

        if failed.len() == TRENDING_SUBREDDITS.len() {
            return Envelope::mock(items, Some("all trending communities failed".to_owned()));
        }
        let envelope = Envelope::real(items);
        if failed.is_empty() {
            envelope
        } else {
            envelope.with_error(format!(
                "some communities unavailable: {}",
                failed.join(", ")
            ))
        }
    }
}
