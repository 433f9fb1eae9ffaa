//! Server construction and middleware wiring.

mod config;

pub use config::AppConfig;

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse, HttpServer};
use utoipa::OpenApi;

use crate::doc::ApiDoc;
use crate::domain::feed::{
    JobFeedService, MarketFeedService, MovieFeedService, NewsFeedService, RecipeFeedService,
    SocialFeedService, VideoFeedService, WeatherService,
};
use crate::domain::ports::{PreferenceStore, WeatherSource};
use crate::domain::variety::{SeededVariety, Variety};
use crate::domain::vocabulary::VocabularyTables;
use crate::inbound::http::deals::get_deals;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::identity::{close_session, get_session, open_session};
use crate::inbound::http::jobs::{get_jobs, get_trending_jobs, search_jobs};
use crate::inbound::http::market::get_market;
use crate::inbound::http::movies::get_movies;
use crate::inbound::http::news::{get_news, get_trending_news, search_news};
use crate::inbound::http::preferences::{
    get_category_preferences, get_preferences, put_category_preferences,
};
use crate::inbound::http::recipes::get_recipes;
use crate::inbound::http::social::{get_social_feed, get_trending_social};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::videos::get_videos;
use crate::inbound::http::weather::get_weather;
use crate::middleware::Trace;
use crate::outbound::adzuna::AdzunaJobSource;
use crate::outbound::coingecko::CoinGeckoMarketSource;
use crate::outbound::gnews::GnewsNewsSource;
use crate::outbound::mealdb::MealDbRecipeSource;
use crate::outbound::memory::InMemoryPreferenceStore;
use crate::outbound::openweather::OpenWeatherSource;
use crate::outbound::reddit::RedditSocialSource;
use crate::outbound::tmdb::TmdbMovieSource;
use crate::outbound::wttr::WttrWeatherSource;
use crate::outbound::youtube::YoutubeVideoSource;
use crate::outbound::AdapterBuildError;

/// Build the aggregated service state from configuration.
///
/// Weather providers are tried in declaration order, so the keyed
/// OpenWeatherMap adapter comes before the keyless wttr.in fallback.
///
/// # Errors
///
/// Returns an error when an upstream HTTP client cannot be constructed.
pub fn build_http_state(config: &AppConfig) -> Result<HttpState, AdapterBuildError> {
    let timeout = config.upstream_timeout;
    let store: Arc<dyn PreferenceStore> = Arc::new(InMemoryPreferenceStore::new());
    let vocabulary = Arc::new(VocabularyTables::new());
    let variety: Arc<dyn Variety> = Arc::new(SeededVariety::new(config.variety_seed));

    let weather_providers: Vec<Arc<dyn WeatherSource>> = vec![
        Arc::new(OpenWeatherSource::new(
            config.openweather_api_keys.clone(),
            timeout,
        )?),
        Arc::new(WttrWeatherSource::new(timeout)?),
    ];

    Ok(HttpState {
        news: Arc::new(NewsFeedService::new(
            Arc::new(GnewsNewsSource::new(config.gnews_api_key.clone(), timeout)?),
            store.clone(),
            vocabulary.clone(),
        )),
        weather: Arc::new(WeatherService::new(weather_providers)),
        videos: Arc::new(VideoFeedService::new(
            Arc::new(YoutubeVideoSource::new(
                config.youtube_api_key.clone(),
                timeout,
            )?),
            store.clone(),
            variety.clone(),
        )),
        social: Arc::new(SocialFeedService::new(
            Arc::new(RedditSocialSource::new(config.reddit.clone(), timeout)?),
            store.clone(),
            vocabulary.clone(),
            variety,
        )),
        recipes: Arc::new(RecipeFeedService::new(
            Arc::new(MealDbRecipeSource::new(timeout)?),
            store.clone(),
            vocabulary.clone(),
        )),
        market: Arc::new(MarketFeedService::new(Arc::new(CoinGeckoMarketSource::new(
            timeout,
        )?))),
        movies: Arc::new(MovieFeedService::new(
            Arc::new(TmdbMovieSource::new(config.tmdb_api_key.clone(), timeout)?),
            store.clone(),
            vocabulary,
        )),
        jobs: Arc::new(JobFeedService::new(
            Arc::new(AdzunaJobSource::new(config.adzuna.clone(), timeout)?),
            store.clone(),
        )),
        preferences: store,
    })
}

/// Assemble the Actix application around prepared state.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
    key: Key,
    cookie_secure: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(open_session)
        .service(get_session)
        .service(close_session)
        .service(get_news)
        .service(get_trending_news)
        .service(search_news)
        .service(get_weather)
        .service(get_videos)
        .service(get_social_feed)
        .service(get_trending_social)
        .service(get_recipes)
        .service(get_market)
        .service(get_movies)
        .service(get_jobs)
        .service(get_trending_jobs)
        .service(search_jobs)
        .service(get_deals)
        .service(get_preferences)
        .service(get_category_preferences)
        .service(put_category_preferences);

    App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
        .route(
            "/api-docs/openapi.json",
            web::get().to(|| async { HttpResponse::Ok().json(ApiDoc::openapi()) }),
        )
}

/// Bind and spawn the HTTP server.
///
/// # Errors
///
/// Returns [`std::io::Error`] when upstream clients cannot be built or the
/// socket cannot be bound.
pub fn run(
    config: &AppConfig,
    key: Key,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let state = build_http_state(config)
        .map_err(|error| std::io::Error::other(format!("failed to build upstreams: {error}")))?;
    let http_state = web::Data::new(state);
    let cookie_secure = config.cookie_secure;

    let server = HttpServer::new(move || {
        build_app(
            http_state.clone(),
            health_state.clone(),
            key.clone(),
            cookie_secure,
        )
    })
    .bind(config.bind_addr)?
    .run();
    Ok(server)
}
