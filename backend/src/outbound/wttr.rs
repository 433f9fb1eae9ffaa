//! Fallback weather source adapter for wttr.in.
//!
//! wttr.in needs no credentials, so it backs up the keyed provider. Its
//! JSON reports every number as a string; parsing is lenient and drops
//! whatever does not parse.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{get_json, AdapterBuildError};
use crate::domain::ports::{RawDailyForecast, RawWeather, UpstreamFailure, WeatherSource};

const DEFAULT_BASE: &str = "https://wttr.in/";

pub struct WttrWeatherSource {
    client: Client,
    base: Url,
}

impl WttrWeatherSource {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// base URL is invalid.
    pub fn new(timeout: Duration) -> Result<Self, AdapterBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: Url::parse(DEFAULT_BASE)?,
        })
    }
}

#[async_trait]
impl WeatherSource for WttrWeatherSource {
    fn name(&self) -> &'static str {
        "wttr.in"
    }

    async fn fetch(&self, city: &str) -> Result<RawWeather, UpstreamFailure> {
        let mut url = self
            .base
            .join(city)
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        url.query_pairs_mut().append_pair("format", "j1");
        let report: ReportDto = get_json(&self.client, url).await?;
        Ok(report.into_raw())
    }
}

fn first_value(values: &[ValueDto]) -> Option<String> {
    values.first().map(|value| value.value.clone())
}

fn parse_number(text: &Option<String>) -> Option<f64> {
    text.as_deref().and_then(|text| text.trim().parse().ok())
}

/// Map a textual condition onto the icon vocabulary the primary provider
/// uses, so the canonical report is uniform across providers.
fn icon_for(description: &str) -> String {
    let description = description.to_lowercase();
    let icon = if description.contains("snow") || description.contains("sleet") {
        "13d"
    } else if description.contains("rain") || description.contains("drizzle") {
        "10d"
    } else if description.contains("thunder") {
        "11d"
    } else if description.contains("fog") || description.contains("mist") {
        "50d"
    } else if description.contains("overcast") || description.contains("cloud") {
        "04d"
    } else if description.contains("clear") || description.contains("sun") {
        "01d"
    } else {
        "02d"
    };
    icon.to_owned()
}

#[derive(Debug, Deserialize)]
struct ReportDto {
    #[serde(default)]
    current_condition: Vec<CurrentDto>,
    #[serde(default)]
    nearest_area: Vec<AreaDto>,
    #[serde(default)]
    weather: Vec<DayDto>,
}

#[derive(Debug, Deserialize)]
struct CurrentDto {
    #[serde(rename = "temp_C")]
    temp_c: Option<String>,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: Option<String>,
    humidity: Option<String>,
    pressure: Option<String>,
    visibility: Option<String>,
    #[serde(rename = "windspeedKmph")]
    windspeed_kmph: Option<String>,
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<ValueDto>,
}

#[derive(Debug, Deserialize)]
struct AreaDto {
    #[serde(rename = "areaName", default)]
    area_name: Vec<ValueDto>,
    #[serde(default)]
    country: Vec<ValueDto>,
}

#[derive(Debug, Deserialize)]
struct DayDto {
    #[serde(rename = "maxtempC")]
    max_temp_c: Option<String>,
    #[serde(rename = "mintempC")]
    min_temp_c: Option<String>,
    #[serde(default)]
    hourly: Vec<HourDto>,
}

#[derive(Debug, Deserialize)]
struct HourDto {
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<ValueDto>,
}

#[derive(Debug, Deserialize)]
struct ValueDto {
    #[serde(default)]
    value: String,
}

impl ReportDto {
    fn into_raw(self) -> RawWeather {
        let current = self.current_condition.first();
        let area = self.nearest_area.first();
        let description = current.and_then(|c| first_value(&c.weather_desc));

        let daily = self
            .weather
            .iter()
            .filter_map(|day| {
                let high_c = parse_number(&day.max_temp_c)?;
                let low_c = parse_number(&day.min_temp_c)?;
                // Midday is the most representative hourly slot.
                let slot = day.hourly.get(day.hourly.len() / 2).or_else(|| day.hourly.first());
                let description = slot
                    .and_then(|hour| first_value(&hour.weather_desc))
                    .unwrap_or_default();
                let icon = icon_for(&description);
                Some(RawDailyForecast {
                    high_c,
                    low_c,
                    description,
                    icon,
                })
            })
            .collect();

        RawWeather {
            city: area.and_then(|a| first_value(&a.area_name)),
            country: area.and_then(|a| first_value(&a.country)),
            temperature_c: current.and_then(|c| parse_number(&c.temp_c)),
            feels_like_c: current.and_then(|c| parse_number(&c.feels_like_c)),
            icon: description.as_deref().map(icon_for),
            description,
            humidity: current
                .and_then(|c| parse_number(&c.humidity))
                .map(|value| value as u32),
            wind_speed_kmh: current.and_then(|c| parse_number(&c.windspeed_kmph)),
            pressure: current
                .and_then(|c| parse_number(&c.pressure))
                .map(|value| value as u32),
            visibility_km: current
                .and_then(|c| parse_number(&c.visibility))
                .map(|value| value as u32),
            samples: Vec::new(),
            daily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_stringly_typed_report() {
        let payload = serde_json::json!({
            "current_condition": [{
                "temp_C": "19", "FeelsLikeC": "18", "humidity": "60",
                "pressure": "1015", "visibility": "10", "windspeedKmph": "14",
                "weatherDesc": [{ "value": "Partly cloudy" }]
            }],
            "nearest_area": [{
                "areaName": [{ "value": "Berlin" }],
                "country": [{ "value": "Germany" }]
            }],
            "weather": [{
                "maxtempC": "22", "mintempC": "12",
                "hourly": [
                    { "weatherDesc": [{ "value": "Sunny" }] },
                    { "weatherDesc": [{ "value": "Light rain" }] },
                    { "weatherDesc": [{ "value": "Cloudy" }] }
                ]
            }]
        });
        let dto: ReportDto = serde_json::from_value(payload).expect("parse");
        let raw = dto.into_raw();
        assert_eq!(raw.city.as_deref(), Some("Berlin"));
        assert_eq!(raw.temperature_c, Some(19.0));
        assert_eq!(raw.wind_speed_kmh, Some(14.0));
        assert_eq!(raw.daily.len(), 1);
        assert_eq!(raw.daily[0].description, "Light rain");
        assert_eq!(raw.daily[0].icon, "10d");
    }

    #[test]
    fn unparsable_numbers_become_absent_not_errors() {
        let payload = serde_json::json!({
            "current_condition": [{ "temp_C": "n/a", "weatherDesc": [] }],
            "weather": [{ "maxtempC": "??", "mintempC": "3" }]
        });
        let dto: ReportDto = serde_json::from_value(payload).expect("parse");
        let raw = dto.into_raw();
        assert_eq!(raw.temperature_c, None);
        assert!(raw.daily.is_empty());
    }

    #[test]
    fn icons_map_from_condition_keywords() {
        assert_eq!(icon_for("Heavy snow showers"), "13d");
        assert_eq!(icon_for("Clear"), "01d");
        assert_eq!(icon_for("Patchy light drizzle"), "10d");
        assert_eq!(icon_for("Haboob"), "02d");
    }
}
