//! Movie recommendation aggregation.

use std::sync::Arc;

use crate::domain::feed::preferences_for;
use crate::domain::normalize;
use crate::domain::ports::{MovieSource, PreferenceStore};
use crate::domain::vocabulary::{title_case, VocabularyTables};
use crate::domain::{mock, Category, CategoryPreferences, Envelope, MovieSummary, UserId};

const RESULT_LIMIT: usize = 10;

pub struct MovieFeedService {
    source: Arc<dyn MovieSource>,
    preferences: Arc<dyn PreferenceStore>,
    vocabulary: Arc<VocabularyTables>,
}

impl MovieFeedService {
    pub fn new(
        source: Arc<dyn MovieSource>,
        preferences: Arc<dyn PreferenceStore>,
        vocabulary: Arc<VocabularyTables>,
    ) -> Self {
        Self {
            source,
            preferences,
            vocabulary,
        }
    }

    /// Recommendations for the caller's preferred genres.
    ///
    /// Genre names translate to the catalogue's numeric ids; names with no
    /// id are dropped, and a preference list with no known genre at all
    /// falls back to the default genres rather than an unfiltered query.
    pub async fn personalised(&self, user: Option<&UserId>) -> Envelope<MovieSummary> {
        let prefs = preferences_for(self.preferences.as_ref(), user, Category::Movies).await;
        let (genres, languages) = match prefs {
            CategoryPreferences::Movies { genres, languages } => (genres, languages),
            _ => (vec!["action".to_owned()], vec!["english".to_owned()]),
        };
        let mut genre_ids = self.vocabulary.movie_genre_ids(&genres);
        let genre_label = genres
            .first()
            .map_or_else(|| "Action".to_owned(), |genre| title_case(genre));
        if genre_ids.is_empty() {
            genre_ids = self
                .vocabulary
                .movie_genre_ids(&["action".to_owned(), "comedy".to_owned()]);
        }
        let language = languages
            .first()
            .map_or_else(|| "English".to_owned(), |language| title_case(language));

        let envelope = match self.source.discover(&genre_ids, RESULT_LIMIT).await {
            Ok(raw) => Envelope::real(normalize::movies::movies(raw, &genre_label, &language)),
            Err(err) => {
                tracing::warn!(error = %err, "movie discovery failed");
                Envelope::mock(mock::movies(&genre_label, &language), Some(err.to_string()))
            }
        };
        envelope.with_category(&genre_label)
    }
}
