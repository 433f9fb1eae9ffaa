//! Video feed aggregation.

use std::sync::Arc;

use crate::domain::feed::preferences_for;
use crate::domain::normalize;
use crate::domain::ports::{PreferenceStore, VideoOrder, VideoSource};
use crate::domain::variety::{pick_from, Variety};
use crate::domain::{mock, Category, CategoryPreferences, Envelope, UserId, Video};

const RESULT_LIMIT: usize = 10;

/// Search phrasings rotated between calls so repeat visits surface
/// different results for the same topic. `{}` is the topic placeholder.
const PHRASES: [&str; 6] = [
    "{} latest news",
    "{} trends 2025",
    "{} updates",
    "{} tutorial",
    "latest {}",
    "{} review",
];

const ORDERS: [VideoOrder; 3] = [VideoOrder::Date, VideoOrder::Relevance, VideoOrder::ViewCount];

pub struct VideoFeedService {
    source: Arc<dyn VideoSource>,
    preferences: Arc<dyn PreferenceStore>,
    variety: Arc<dyn Variety>,
}

impl VideoFeedService {
    pub fn new(
        source: Arc<dyn VideoSource>,
        preferences: Arc<dyn PreferenceStore>,
        variety: Arc<dyn Variety>,
    ) -> Self {
        Self {
            source,
            preferences,
            variety,
        }
    }

    /// Recent videos for one of the caller's preferred topics.
    ///
    /// Topic, phrasing, and sort order are picked through the injected
    /// [`Variety`] seam; an upstream failure degrades to synthetic videos
    /// for the chosen topic.
    pub async fn personalised(&self, user: Option<&UserId>) -> Envelope<Video> {
        let prefs = preferences_for(self.preferences.as_ref(), user, Category::Videos).await;
        let topics = match prefs {
            CategoryPreferences::Videos { topics } if !topics.is_empty() => topics,
            _ => vec!["technology".to_owned()],
        };
        let topic = pick_from(self.variety.as_ref(), &topics)
            .cloned()
            .unwrap_or_else(|| "technology".to_owned());
        let phrase = pick_from(self.variety.as_ref(), &PHRASES).copied().unwrap_or(PHRASES[0]);
        let order = pick_from(self.variety.as_ref(), &ORDERS).copied().unwrap_or(ORDERS[0]);
        let query = phrase.replace("{}", &topic);

        match self.source.search(&query, order, RESULT_LIMIT).await {
            Ok(raw) => {
                Envelope::real(normalize::videos::videos(raw, &topic)).with_category(&topic)
            }
            Err(err) => {
                tracing::warn!(topic = %topic, error = %err, "video search failed");
                Envelope::mock(mock::videos(&topic), Some(err.to_string())).with_category(&topic)
            }
        }
    }
}
