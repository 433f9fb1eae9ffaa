//! Port for weather providers.
//!
//! The weather feed holds an ordered list of providers and takes the first
//! success, so multiple adapters implement this one trait.

use async_trait::async_trait;

use super::UpstreamFailure;

/// One forecast sample (the primary provider returns 3-hourly samples).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawForecastEntry {
    /// Unix timestamp of the sample.
    pub timestamp: i64,
    pub temperature_c: f64,
    pub description: String,
    pub icon: String,
}

/// One pre-aggregated forecast day (the secondary provider returns these).
#[derive(Debug, Clone, PartialEq)]
pub struct RawDailyForecast {
    pub high_c: f64,
    pub low_c: f64,
    pub description: String,
    pub icon: String,
}

/// Current conditions plus whatever forecast granularity the provider has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawWeather {
    pub city: Option<String>,
    pub country: Option<String>,
    pub temperature_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub description: Option<String>,
    pub humidity: Option<u32>,
    pub wind_speed_kmh: Option<f64>,
    pub pressure: Option<u32>,
    pub visibility_km: Option<u32>,
    pub icon: Option<String>,
    /// Sampled forecast entries; empty when the forecast call failed.
    pub samples: Vec<RawForecastEntry>,
    /// Pre-aggregated daily forecasts; empty for sample-based providers.
    pub daily: Vec<RawDailyForecast>,
}

/// Fetch current conditions and forecast for a city.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Short provider name used in failure messages.
    fn name(&self) -> &'static str;

    async fn fetch(&self, city: &str) -> Result<RawWeather, UpstreamFailure>;
}
