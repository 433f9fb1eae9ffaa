//! Core domain: content model, preference rules, normalisation, and the
//! feed services that orchestrate upstream calls with fallback.

pub mod content;
pub mod error;
pub mod feed;
pub mod mock;
pub mod normalize;
pub mod ports;
pub mod preferences;
pub mod user;
pub mod variety;
pub mod vocabulary;

pub use content::{
    Article, CoinQuote, DailyForecast, Deal, Envelope, JobListing, MovieSummary, Nutrition, Post,
    Recipe, Video, WeatherReport,
};
pub use error::{Error, ErrorCode};
pub use preferences::{Category, CategoryPreferences, PreferenceDocument, UnknownCategory};
pub use user::{UserId, UserIdValidationError};
