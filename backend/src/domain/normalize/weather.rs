//! Weather normalisation and five-day forecast derivation.
//!
//! Providers differ in forecast granularity: the primary returns 3-hourly
//! samples, the secondary pre-aggregated days, and either forecast call
//! may fail while current conditions succeed. This module collapses all
//! three shapes into a five-day forecast, synthesising plausible days
//! from current conditions when no forecast data arrived at all.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::domain::content::{DailyForecast, WeatherReport};
use crate::domain::ports::{RawForecastEntry, RawWeather};
use crate::domain::vocabulary::title_case;

const FORECAST_DAYS: usize = 5;

/// Per-day offsets used when synthesising forecast days: a description,
/// its icon, and a temperature delta against current conditions.
const SYNTH_VARIATIONS: [(&str, &str, i32); 5] = [
    ("", "", 0),
    ("Partly cloudy", "03d", -2),
    ("Light rain", "10d", -4),
    ("Cloudy", "04d", -1),
    ("Sunny", "01d", 3),
];

/// Build a canonical report from whatever the provider returned.
///
/// Total: every missing field has a default and the forecast is always
/// populated, falling back to synthesis from current conditions.
pub fn report(raw: RawWeather, requested_city: &str, now: DateTime<Utc>) -> WeatherReport {
    let temperature = raw.temperature_c.map_or(0, round);
    let description = raw
        .description
        .clone()
        .filter(|text| !text.trim().is_empty())
        .map_or_else(|| "Unknown".to_owned(), |text| title_case(&text));
    let icon = raw
        .icon
        .clone()
        .filter(|icon| !icon.trim().is_empty())
        .unwrap_or_else(|| "01d".to_owned());

    let forecast = forecast_days(&raw, temperature, &description, &icon, now);

    WeatherReport {
        city: raw
            .city
            .filter(|city| !city.trim().is_empty())
            .unwrap_or_else(|| title_case(requested_city)),
        country: raw.country.unwrap_or_default(),
        temperature,
        feels_like: raw.feels_like_c.map_or(temperature, round),
        description,
        humidity: raw.humidity.unwrap_or(0),
        wind_speed: raw.wind_speed_kmh.map_or(0, round),
        pressure: raw.pressure.unwrap_or(0),
        visibility: raw.visibility_km.unwrap_or(0),
        icon,
        forecast,
        is_mock: false,
        timestamp: now,
    }
}

fn round(value: f64) -> i32 {
    value.round() as i32
}

fn forecast_days(
    raw: &RawWeather,
    temperature: i32,
    description: &str,
    icon: &str,
    now: DateTime<Utc>,
) -> Vec<DailyForecast> {
    let today = now.date_naive();
    let mut days = if raw.samples.is_empty() {
        raw.daily
            .iter()
            .take(FORECAST_DAYS)
            .enumerate()
            .map(|(index, day)| DailyForecast {
                day: day_label(offset_date(today, index), today),
                high: round(day.high_c),
                low: round(day.low_c),
                description: title_case(&day.description),
                icon: day.icon.clone(),
            })
            .collect()
    } else {
        aggregate_samples(&raw.samples, today)
    };

    // Pad short forecasts with synthesised days so there are always five.
    while days.len() < FORECAST_DAYS {
        days.push(synthesised_day(
            temperature,
            description,
            icon,
            days.len(),
            today,
        ));
    }
    days
}

/// Group 3-hourly samples by calendar day; each day reports the min/max
/// temperature and the most frequent description (first seen wins ties).
fn aggregate_samples(samples: &[RawForecastEntry], today: NaiveDate) -> Vec<DailyForecast> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&RawForecastEntry>> = BTreeMap::new();
    for sample in samples {
        let Some(instant) = DateTime::from_timestamp(sample.timestamp, 0) else {
            continue;
        };
        by_date.entry(instant.date_naive()).or_default().push(sample);
    }

    by_date
        .into_iter()
        .take(FORECAST_DAYS)
        .map(|(date, entries)| {
            let high = entries
                .iter()
                .map(|entry| entry.temperature_c)
                .fold(f64::NEG_INFINITY, f64::max);
            let low = entries
                .iter()
                .map(|entry| entry.temperature_c)
                .fold(f64::INFINITY, f64::min);
            let leader = majority_description(&entries);
            DailyForecast {
                day: day_label(date, today),
                high: round(high),
                low: round(low),
                description: title_case(&leader.description),
                icon: leader.icon.clone(),
            }
        })
        .collect()
}

fn majority_description<'a>(entries: &[&'a RawForecastEntry]) -> &'a RawForecastEntry {
    let mut counts: Vec<(&str, usize, &RawForecastEntry)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(text, ..)| *text == entry.description) {
            Some((_, count, _)) => *count += 1,
            None => counts.push((&entry.description, 1, entry)),
        }
    }
    counts
        .into_iter()
        .max_by_key(|(_, count, _)| *count)
        .map_or(entries[0], |(.., entry)| entry)
}

fn synthesised_day(
    temperature: i32,
    description: &str,
    icon: &str,
    index: usize,
    today: NaiveDate,
) -> DailyForecast {
    let (variant_description, variant_icon, delta) = SYNTH_VARIATIONS[index % SYNTH_VARIATIONS.len()];
    let high = temperature + delta + (index as i32 - 2);
    DailyForecast {
        day: day_label(offset_date(today, index), today),
        high,
        low: high - 8,
        description: if variant_description.is_empty() {
            description.to_owned()
        } else {
            variant_description.to_owned()
        },
        icon: if variant_icon.is_empty() {
            icon.to_owned()
        } else {
            variant_icon.to_owned()
        },
    }
}

fn offset_date(today: NaiveDate, index: usize) -> NaiveDate {
    today
        .checked_add_days(Days::new(index as u64))
        .unwrap_or(today)
}

fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_owned()
    } else if Some(date) == today.succ_opt() {
        "Tomorrow".to_owned()
    } else {
        date.weekday().to_string()
    }
}
