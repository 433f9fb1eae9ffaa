//! Canonical content types and the uniform response envelope.
//!
//! Every feed normalises its upstream payload into one of these shapes.
//! All items carry a non-empty `id` unique within a response and an
//! `is_static` flag so callers can always distinguish real from synthetic
//! data; the envelope's `count` always equals `items.len()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope echoing the request parameters.
///
/// `error` is present only when the real upstream path failed; it coexists
/// with populated `items` when mock data was substituted or when only some
/// sub-requests failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subreddit: Option<String>,
    pub count: usize,
    pub items: Vec<T>,
    pub is_mock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> Envelope<T> {
    fn new(items: Vec<T>, is_mock: bool) -> Self {
        Self {
            category: None,
            query: None,
            subreddit: None,
            count: items.len(),
            items,
            is_mock,
            error: None,
            message: None,
            timestamp: Utc::now(),
        }
    }

    /// Envelope for items obtained from a real upstream.
    pub fn real(items: Vec<T>) -> Self {
        Self::new(items, false)
    }

    /// Envelope for synthesised items, annotated with the failure cause.
    pub fn mock(items: Vec<T>, error: Option<String>) -> Self {
        let mut envelope = Self::new(items, true);
        envelope.error = error;
        envelope
    }

    /// Echo the requested category back to the caller.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Echo the requested query back to the caller.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Echo the requested subreddit back to the caller.
    pub fn with_subreddit(mut self, subreddit: impl Into<String>) -> Self {
        self.subreddit = Some(subreddit.into());
        self
    }

    /// Attach an advisory message (e.g. "add credentials for live data").
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Record a partial upstream failure without marking the envelope mock.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub category: String,
    pub published_at: String,
    pub image_url: String,
    pub is_static: bool,
}

/// A video search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
    pub channel: String,
    pub category: String,
    pub published_at: String,
    pub is_static: bool,
}

/// A social discussion post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub subreddit: String,
    pub author: String,
    pub score: i64,
    pub comments: u64,
    pub created_at: String,
    pub is_static: bool,
}

/// Heuristic nutrition estimate attached to recipes; not authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A recipe with derived preparation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub cuisine: Vec<String>,
    pub dietary: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub source_url: String,
    pub nutrition: Nutrition,
    pub is_static: bool,
}

/// A movie catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub rating: f64,
    pub year: String,
    pub language: String,
    pub poster_url: String,
    pub is_static: bool,
}

/// A job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub contract_type: String,
    pub salary: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub posted_at: String,
    pub is_static: bool,
}

/// A marketplace deal; this domain is synthesizer-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub platform: String,
    pub category: String,
    pub price: f64,
    pub original_price: f64,
    pub discount: f64,
    pub image_url: String,
    pub valid_until: String,
    pub is_static: bool,
}

/// A cryptocurrency market quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoinQuote {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change_24h: f64,
    pub market_cap: i64,
    pub volume: i64,
    pub image: String,
    pub rank: u32,
    pub is_static: bool,
}

/// One day of forecast inside a [`WeatherReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyForecast {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub description: String,
    pub icon: String,
}

/// Current conditions plus a five-day forecast for one city.
///
/// Weather is a single report rather than an item list, so it carries its
/// own `is_mock` flag directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: i32,
    pub pressure: u32,
    pub visibility: u32,
    pub icon: String,
    pub forecast: Vec<DailyForecast>,
    pub is_mock: bool,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_owned(),
            title: String::new(),
            description: String::new(),
            url: String::new(),
            source: String::new(),
            category: String::new(),
            published_at: String::new(),
            image_url: String::new(),
            is_static: false,
        }
    }

    #[test]
    fn count_always_equals_item_length() {
        let real = Envelope::real(vec![article("a"), article("b")]);
        assert_eq!(real.count, real.items.len());
        assert!(!real.is_mock);

        let mock = Envelope::mock(vec![article("a")], Some("boom".to_owned()));
        assert_eq!(mock.count, 1);
        assert!(mock.is_mock);
        assert_eq!(mock.error.as_deref(), Some("boom"));
    }

    #[test]
    fn unset_scope_fields_are_omitted_from_json() {
        let envelope = Envelope::real(vec![article("a")]).with_category("general");
        let value = serde_json::to_value(&envelope).expect("serialise");
        assert_eq!(value["category"], "general");
        assert!(value.get("query").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn partial_failure_keeps_envelope_real() {
        let envelope = Envelope::real(vec![article("a")]).with_error("one category failed");
        assert!(!envelope.is_mock);
        assert!(envelope.error.is_some());
    }
}
