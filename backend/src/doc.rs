//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct that generates the OpenAPI specification
//! for the REST API. The document is served at `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Article, CategoryPreferences, CoinQuote, DailyForecast, Deal, Envelope, Error, ErrorCode,
    JobListing, MovieSummary, Nutrition, Post, PreferenceDocument, Recipe, Video, WeatherReport,
};
use crate::inbound::http::identity::{IdentityResponse, OpenSessionRequest};
use crate::inbound::http::preferences::PreferencesResponse;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/session.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Mosaic backend API",
        description = "Aggregated, preference-aware content feeds over third-party APIs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::identity::open_session,
        crate::inbound::http::identity::get_session,
        crate::inbound::http::identity::close_session,
        crate::inbound::http::news::get_news,
        crate::inbound::http::news::get_trending_news,
        crate::inbound::http::news::search_news,
        crate::inbound::http::weather::get_weather,
        crate::inbound::http::videos::get_videos,
        crate::inbound::http::social::get_social_feed,
        crate::inbound::http::social::get_trending_social,
        crate::inbound::http::recipes::get_recipes,
        crate::inbound::http::market::get_market,
        crate::inbound::http::movies::get_movies,
        crate::inbound::http::jobs::get_jobs,
        crate::inbound::http::jobs::get_trending_jobs,
        crate::inbound::http::jobs::search_jobs,
        crate::inbound::http::deals::get_deals,
        crate::inbound::http::preferences::get_preferences,
        crate::inbound::http::preferences::get_category_preferences,
        crate::inbound::http::preferences::put_category_preferences,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Envelope<Article>,
        Envelope<Video>,
        Envelope<Post>,
        Envelope<Recipe>,
        Envelope<MovieSummary>,
        Envelope<JobListing>,
        Envelope<Deal>,
        Envelope<CoinQuote>,
        Article,
        Video,
        Post,
        Recipe,
        Nutrition,
        MovieSummary,
        JobListing,
        Deal,
        CoinQuote,
        WeatherReport,
        DailyForecast,
        CategoryPreferences,
        PreferenceDocument,
        PreferencesResponse,
        IdentityResponse,
        OpenSessionRequest,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "session", description = "Session identity"),
        (name = "news", description = "News headlines and search"),
        (name = "weather", description = "Weather reports"),
        (name = "videos", description = "Video feeds"),
        (name = "social", description = "Community discussion feeds"),
        (name = "recipes", description = "Recipe suggestions"),
        (name = "market", description = "Cryptocurrency market quotes"),
        (name = "movies", description = "Movie suggestions"),
        (name = "jobs", description = "Job listings"),
        (name = "deals", description = "Curated shopping deals"),
        (name = "preferences", description = "Per-category user preferences"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;
