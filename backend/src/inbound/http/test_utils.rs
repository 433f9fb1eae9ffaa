//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use async_trait::async_trait;

use crate::domain::feed::{
    JobFeedService, MarketFeedService, MovieFeedService, NewsFeedService, RecipeFeedService,
    SocialFeedService, VideoFeedService, WeatherService,
};
use crate::domain::ports::{
    FixturePreferenceStore, JobSource, MarketSource, MealSummary, MovieSource, NewsSource,
    RawArticle, RawCoin, RawJob, RawMeal, RawMovie, RawPost, RawVideo, RecipeSource, SocialSort,
    SocialSource, UpstreamFailure, VideoOrder, VideoSource,
};
use crate::domain::variety::FixedVariety;
use crate::domain::vocabulary::VocabularyTables;
use crate::inbound::http::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Source fixture whose every call fails with a transport error, driving the
/// feed services onto their fallback path.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSource;

fn offline() -> UpstreamFailure {
    UpstreamFailure::transport("offline fixture")
}

#[async_trait]
impl NewsSource for OfflineSource {
    async fn top_headlines(
        &self,
        _topic: &str,
        _limit: usize,
    ) -> Result<Vec<RawArticle>, UpstreamFailure> {
        Err(offline())
    }

    async fn search(
        &self,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<RawArticle>, UpstreamFailure> {
        Err(offline())
    }
}

#[async_trait]
impl VideoSource for OfflineSource {
    async fn search(
        &self,
        _query: &str,
        _order: VideoOrder,
        _limit: usize,
    ) -> Result<Vec<RawVideo>, UpstreamFailure> {
        Err(offline())
    }
}

#[async_trait]
impl SocialSource for OfflineSource {
    async fn posts(
        &self,
        _subreddit: &str,
        _sort: SocialSort,
        _limit: usize,
    ) -> Result<Vec<RawPost>, UpstreamFailure> {
        Err(offline())
    }
}

#[async_trait]
impl RecipeSource for OfflineSource {
    async fn by_cuisine(&self, _area: &str) -> Result<Vec<MealSummary>, UpstreamFailure> {
        Err(offline())
    }

    async fn lookup(&self, _id: &str) -> Result<Option<RawMeal>, UpstreamFailure> {
        Err(offline())
    }

    async fn search(&self, _query: &str) -> Result<Vec<RawMeal>, UpstreamFailure> {
        Err(offline())
    }
}

#[async_trait]
impl MarketSource for OfflineSource {
    async fn top_coins(&self, _limit: usize) -> Result<Vec<RawCoin>, UpstreamFailure> {
        Err(offline())
    }
}

#[async_trait]
impl MovieSource for OfflineSource {
    async fn discover(
        &self,
        _genre_ids: &[u32],
        _limit: usize,
    ) -> Result<Vec<RawMovie>, UpstreamFailure> {
        Err(offline())
    }
}

#[async_trait]
impl JobSource for OfflineSource {
    async fn search(&self, _what: &str, _limit: usize) -> Result<Vec<RawJob>, UpstreamFailure> {
        Err(offline())
    }
}

/// Build an [`HttpState`] whose upstream sources are all unreachable.
///
/// Every feed endpoint served from this state degrades to synthesised data,
/// which keeps handler tests deterministic.
pub fn offline_state() -> HttpState {
    let source = Arc::new(OfflineSource);
    let store = Arc::new(FixturePreferenceStore);
    let vocabulary = Arc::new(VocabularyTables::new());
    let variety = Arc::new(FixedVariety(0));

    HttpState {
        news: Arc::new(NewsFeedService::new(
            source.clone(),
            store.clone(),
            vocabulary.clone(),
        )),
        weather: Arc::new(WeatherService::new(Vec::new())),
        videos: Arc::new(VideoFeedService::new(
            source.clone(),
            store.clone(),
            variety.clone(),
        )),
        social: Arc::new(SocialFeedService::new(
            source.clone(),
            store.clone(),
            vocabulary.clone(),
            variety,
        )),
        recipes: Arc::new(RecipeFeedService::new(
            source.clone(),
            store.clone(),
            vocabulary.clone(),
        )),
        market: Arc::new(MarketFeedService::new(source.clone())),
        movies: Arc::new(MovieFeedService::new(
            source.clone(),
            store.clone(),
            vocabulary,
        )),
        jobs: Arc::new(JobFeedService::new(source, store.clone())),
        preferences: store,
    }
}
