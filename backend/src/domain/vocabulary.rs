//! Static vocabulary tables translating user preference terms into each
//! upstream provider's controlled vocabulary.
//!
//! Tables are immutable, constructed once at process start, and shared by
//! reference with the feed services. Lookup is case-insensitive. Unknown
//! terms never block the pipeline: string vocabularies pass the original
//! term through title-cased; the numeric genre vocabulary drops unknowns.

use std::collections::HashMap;

/// Title-case a term the way the mock and pass-through paths present it:
/// first letter of each whitespace-separated word upper-cased, the rest
/// lower-cased ("klingon" becomes "Klingon").
pub fn title_case(term: &str) -> String {
    term.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Immutable translation tables, one per upstream domain.
#[derive(Debug)]
pub struct VocabularyTables {
    cuisines: HashMap<&'static str, &'static str>,
    news_topics: HashMap<&'static str, &'static str>,
    subreddits: HashMap<&'static str, &'static str>,
    movie_genres: HashMap<&'static str, u32>,
}

impl Default for VocabularyTables {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyTables {
    /// Build the built-in tables.
    pub fn new() -> Self {
        let cuisines = HashMap::from([
            ("italian", "Italian"),
            ("chinese", "Chinese"),
            ("indian", "Indian"),
            ("mexican", "Mexican"),
            ("french", "French"),
            ("american", "American"),
            ("british", "British"),
            ("thai", "Thai"),
            ("japanese", "Japanese"),
        ]);
        let news_topics = HashMap::from([
            ("general", "general"),
            ("world", "world"),
            ("nation", "nation"),
            ("business", "business"),
            ("technology", "technology"),
            ("entertainment", "entertainment"),
            ("sports", "sports"),
            ("science", "science"),
            ("health", "health"),
        ]);
        let subreddits = HashMap::from([
            ("technology", "technology"),
            ("programming", "programming"),
            ("science", "science"),
            ("news", "worldnews"),
            ("world", "worldnews"),
            ("gaming", "gaming"),
            ("movies", "movies"),
            ("music", "Music"),
            ("sports", "sports"),
            ("finance", "personalfinance"),
        ]);
        let movie_genres = HashMap::from([
            ("action", 28),
            ("adventure", 12),
            ("animation", 16),
            ("comedy", 35),
            ("crime", 80),
            ("documentary", 99),
            ("drama", 18),
            ("family", 10751),
            ("fantasy", 14),
            ("horror", 27),
            ("romance", 10749),
            ("science fiction", 878),
            ("scifi", 878),
            ("thriller", 53),
        ]);
        Self {
            cuisines,
            news_topics,
            subreddits,
            movie_genres,
        }
    }

    fn map_term(table: &HashMap<&'static str, &'static str>, term: &str) -> String {
        table
            .get(term.to_lowercase().as_str())
            .map_or_else(|| title_case(term), |mapped| (*mapped).to_owned())
    }

    /// Map a single cuisine term to the meal catalogue's area name.
    pub fn cuisine_area(&self, term: &str) -> String {
        Self::map_term(&self.cuisines, term)
    }

    /// Map cuisine terms to catalogue areas, preserving order.
    pub fn cuisine_areas(&self, terms: &[String]) -> Vec<String> {
        terms.iter().map(|term| self.cuisine_area(term)).collect()
    }

    /// Map news topic terms to provider topic slugs, preserving order.
    ///
    /// Unknown topics pass through lower-cased since the provider treats the
    /// slug as free text only for known topics; pass-through keeps the
    /// pipeline moving and the provider falls back to general coverage.
    pub fn news_slugs(&self, terms: &[String]) -> Vec<String> {
        terms
            .iter()
            .map(|term| {
                self.news_topics
                    .get(term.to_lowercase().as_str())
                    .map_or_else(|| term.to_lowercase(), |slug| (*slug).to_owned())
            })
            .collect()
    }

    /// Map social topic terms to subreddit names, preserving order.
    pub fn subreddit_names(&self, terms: &[String]) -> Vec<String> {
        terms
            .iter()
            .map(|term| {
                self.subreddits
                    .get(term.to_lowercase().as_str())
                    .map_or_else(|| term.to_lowercase(), |name| (*name).to_owned())
            })
            .collect()
    }

    /// Map genre names to the movie catalogue's numeric genre ids,
    /// preserving order and dropping unknown terms.
    pub fn movie_genre_ids(&self, terms: &[String]) -> Vec<u32> {
        terms
            .iter()
            .filter_map(|term| self.movie_genres.get(term.to_lowercase().as_str()).copied())
            .collect()
    }
}
