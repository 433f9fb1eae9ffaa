//! Driven ports: the traits the domain calls outward through.
//!
//! Every upstream adapter implements one of these traits and reports
//! problems through the shared [`UpstreamFailure`] type so the feed
//! services can treat any provider outage uniformly.

mod failure;
mod jobs;
mod market;
mod movies;
mod news;
mod preference_store;
mod recipes;
mod social;
mod videos;
mod weather;

pub use failure::UpstreamFailure;
pub use jobs::{JobSource, RawJob};
pub use market::{MarketSource, RawCoin};
pub use movies::{MovieSource, RawMovie};
pub use news::{NewsSource, RawArticle};
pub use preference_store::{FixturePreferenceStore, PreferenceStore, PreferenceStoreError};
pub use recipes::{IngredientSlot, MealSummary, RawMeal, RecipeSource};
pub use social::{RawPost, SocialSort, SocialSource};
pub use videos::{RawVideo, VideoOrder, VideoSource};
pub use weather::{RawDailyForecast, RawForecastEntry, RawWeather, WeatherSource};

#[cfg(test)]
pub use jobs::MockJobSource;
#[cfg(test)]
pub use market::MockMarketSource;
#[cfg(test)]
pub use movies::MockMovieSource;
#[cfg(test)]
pub use news::MockNewsSource;
#[cfg(test)]
pub use preference_store::MockPreferenceStore;
#[cfg(test)]
pub use recipes::MockRecipeSource;
#[cfg(test)]
pub use social::MockSocialSource;
#[cfg(test)]
pub use videos::MockVideoSource;
#[cfg(test)]
pub use weather::MockWeatherSource;
