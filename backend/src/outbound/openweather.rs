//! Reqwest-backed weather source adapter for OpenWeatherMap.
//!
//! Accepts several API keys and rotates through them on failure, since
//! free-tier keys are individually rate limited. The forecast call is
//! best-effort: when it fails the current conditions still succeed and
//! the normaliser synthesises the forecast instead.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{get_json, AdapterBuildError};
use crate::domain::ports::{RawForecastEntry, RawWeather, UpstreamFailure, WeatherSource};

const DEFAULT_BASE: &str = "https://api.openweathermap.org/data/2.5/";

pub struct OpenWeatherSource {
    client: Client,
    base: Url,
    api_keys: Vec<String>,
}

impl OpenWeatherSource {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// base URL is invalid.
    pub fn new(api_keys: Vec<String>, timeout: Duration) -> Result<Self, AdapterBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: Url::parse(DEFAULT_BASE)?,
            api_keys,
        })
    }

    fn endpoint(&self, path: &str, city: &str, key: &str) -> Result<Url, UpstreamFailure> {
        let mut url = self
            .base
            .join(path)
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("units", "metric")
            .append_pair("appid", key);
        Ok(url)
    }

    async fn current(&self, city: &str, key: &str) -> Result<CurrentDto, UpstreamFailure> {
        get_json(&self.client, self.endpoint("weather", city, key)?).await
    }

    async fn forecast(&self, city: &str, key: &str) -> Result<ForecastDto, UpstreamFailure> {
        get_json(&self.client, self.endpoint("forecast", city, key)?).await
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    fn name(&self) -> &'static str {
        "openweathermap"
    }

    async fn fetch(&self, city: &str) -> Result<RawWeather, UpstreamFailure> {
        if self.api_keys.is_empty() {
            return Err(UpstreamFailure::missing_credential(
                "no OpenWeatherMap API key configured",
            ));
        }

        let mut last_error = None;
        for key in &self.api_keys {
            let current = match self.current(city, key).await {
                Ok(current) => current,
                Err(err) => {
                    tracing::debug!(error = %err, "weather key failed; rotating");
                    last_error = Some(err);
                    continue;
                }
            };
            let samples = match self.forecast(city, key).await {
                Ok(forecast) => forecast.into_samples(),
                Err(err) => {
                    tracing::debug!(error = %err, "forecast unavailable; continuing without");
                    Vec::new()
                }
            };
            return Ok(current.into_raw(samples));
        }
        Err(last_error
            .unwrap_or_else(|| UpstreamFailure::transport("no weather key succeeded")))
    }
}

#[derive(Debug, Deserialize)]
struct CurrentDto {
    name: Option<String>,
    sys: Option<SysDto>,
    main: Option<MainDto>,
    #[serde(default)]
    weather: Vec<ConditionDto>,
    wind: Option<WindDto>,
    /// Metres; the canonical report uses kilometres.
    visibility: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SysDto {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<u32>,
    pressure: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WindDto {
    /// Metres per second with metric units.
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastDto {
    #[serde(default)]
    list: Vec<ForecastEntryDto>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntryDto {
    dt: Option<i64>,
    main: Option<MainDto>,
    #[serde(default)]
    weather: Vec<ConditionDto>,
}

impl CurrentDto {
    fn into_raw(self, samples: Vec<RawForecastEntry>) -> RawWeather {
        let condition = self.weather.into_iter().next();
        let main = self.main;
        RawWeather {
            city: self.name,
            country: self.sys.and_then(|sys| sys.country),
            temperature_c: main.as_ref().and_then(|main| main.temp),
            feels_like_c: main.as_ref().and_then(|main| main.feels_like),
            description: condition.as_ref().and_then(|c| c.description.clone()),
            humidity: main.as_ref().and_then(|main| main.humidity),
            wind_speed_kmh: self
                .wind
                .and_then(|wind| wind.speed)
                .map(|metres_per_second| metres_per_second * 3.6),
            pressure: main.as_ref().and_then(|main| main.pressure),
            visibility_km: self.visibility.map(|metres| metres / 1000),
            icon: condition.and_then(|c| c.icon),
            samples,
            daily: Vec::new(),
        }
    }
}

impl ForecastDto {
    fn into_samples(self) -> Vec<RawForecastEntry> {
        self.list
            .into_iter()
            .filter_map(|entry| {
                let timestamp = entry.dt?;
                let temperature_c = entry.main.and_then(|main| main.temp)?;
                let condition = entry.weather.into_iter().next();
                Some(RawForecastEntry {
                    timestamp,
                    temperature_c,
                    description: condition
                        .as_ref()
                        .and_then(|c| c.description.clone())
                        .unwrap_or_default(),
                    icon: condition.and_then(|c| c.icon).unwrap_or_default(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_conditions_convert_units() {
        let payload = serde_json::json!({
            "name": "London",
            "sys": { "country": "GB" },
            "main": { "temp": 18.4, "feels_like": 17.9, "humidity": 72, "pressure": 1011 },
            "weather": [{ "description": "light rain", "icon": "10d" }],
            "wind": { "speed": 5.0 },
            "visibility": 10000
        });
        let dto: CurrentDto = serde_json::from_value(payload).expect("parse");
        let raw = dto.into_raw(Vec::new());
        assert_eq!(raw.city.as_deref(), Some("London"));
        assert_eq!(raw.wind_speed_kmh, Some(18.0));
        assert_eq!(raw.visibility_km, Some(10));
        assert_eq!(raw.icon.as_deref(), Some("10d"));
    }

    #[test]
    fn forecast_entries_without_a_temperature_are_dropped() {
        let payload = serde_json::json!({
            "list": [
                { "dt": 1_750_000_000, "main": { "temp": 21.0 },
                  "weather": [{ "description": "clear sky", "icon": "01d" }] },
                { "dt": 1_750_010_800 }
            ]
        });
        let dto: ForecastDto = serde_json::from_value(payload).expect("parse");
        let samples = dto.into_samples();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].description, "clear sky");
    }

    #[test]
    fn tolerates_a_sparse_current_payload() {
        let dto: CurrentDto = serde_json::from_value(serde_json::json!({})).expect("parse");
        let raw = dto.into_raw(Vec::new());
        assert_eq!(raw.temperature_c, None);
        assert!(raw.samples.is_empty());
    }
}
