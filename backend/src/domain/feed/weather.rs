//! Weather aggregation with provider failover.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::normalize;
use crate::domain::ports::WeatherSource;
use crate::domain::{mock, WeatherReport};

/// Tries each configured provider in priority order and normalises the
/// first success; when all providers fail the report is synthesised.
pub struct WeatherService {
    providers: Vec<Arc<dyn WeatherSource>>,
}

impl WeatherService {
    pub fn new(providers: Vec<Arc<dyn WeatherSource>>) -> Self {
        Self { providers }
    }

    /// Current conditions and a five-day forecast for a city.
    ///
    /// Total: an empty provider list or a full outage produces the
    /// synthetic report rather than an error.
    pub async fn report(&self, city: &str) -> WeatherReport {
        for provider in &self.providers {
            match provider.fetch(city).await {
                Ok(raw) => return normalize::weather::report(raw, city, Utc::now()),
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        city,
                        error = %err,
                        "weather provider failed; trying next"
                    );
                }
            }
        }
        mock::weather(city, Utc::now())
    }
}
