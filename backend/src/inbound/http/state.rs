//! Shared state for HTTP handlers.

use std::sync::Arc;

use crate::domain::feed::{
    JobFeedService, MarketFeedService, MovieFeedService, NewsFeedService, RecipeFeedService,
    SocialFeedService, VideoFeedService, WeatherService,
};
use crate::domain::ports::PreferenceStore;

/// Aggregated service handles injected into handlers via `web::Data`.
#[derive(Clone)]
pub struct HttpState {
    pub news: Arc<NewsFeedService>,
    pub weather: Arc<WeatherService>,
    pub videos: Arc<VideoFeedService>,
    pub social: Arc<SocialFeedService>,
    pub recipes: Arc<RecipeFeedService>,
    pub market: Arc<MarketFeedService>,
    pub movies: Arc<MovieFeedService>,
    pub jobs: Arc<JobFeedService>,
    pub preferences: Arc<dyn PreferenceStore>,
}
