//! Environment-driven application configuration.
//!
//! Upstream credentials are all optional: a missing key disables that
//! provider and its feed degrades to synthesised data. Placeholder values
//! copied from a sample env file (anything starting with `your_`) count as
//! unset.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;

use crate::outbound::adzuna::AdzunaCredentials;
use crate::outbound::reddit::RedditCredentials;

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECONDS: u64 = 8;
/// Upstream timeouts stay within this window regardless of configuration.
const TIMEOUT_RANGE_SECONDS: (u64, u64) = (5, 10);

/// Runtime configuration assembled from the process environment.
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Duration,
    pub variety_seed: Option<u64>,
    pub cookie_secure: bool,
    pub gnews_api_key: Option<String>,
    pub openweather_api_keys: Vec<String>,
    pub youtube_api_key: Option<String>,
    pub reddit: Option<RedditCredentials>,
    pub tmdb_api_key: Option<String>,
    pub adzuna: Option<AdzunaCredentials>,
}

impl AppConfig {
    /// Read configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let reddit = match (secret("REDDIT_CLIENT_ID"), secret("REDDIT_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(RedditCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };
        let adzuna = match (secret("ADZUNA_APP_ID"), secret("ADZUNA_APP_KEY")) {
            (Some(app_id), Some(app_key)) => Some(AdzunaCredentials { app_id, app_key }),
            _ => None,
        };

        Self {
            bind_addr: parse_bind(env::var("BIND_ADDR").ok().as_deref()),
            upstream_timeout: parse_timeout(env::var("UPSTREAM_TIMEOUT_SECONDS").ok().as_deref()),
            variety_seed: parse_seed(env::var("VARIETY_SEED").ok().as_deref()),
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .map(|v| v != "0")
                .unwrap_or(true),
            gnews_api_key: secret("GNEWS_API_KEY"),
            openweather_api_keys: split_keys(env::var("OPENWEATHER_API_KEYS").ok().as_deref()),
            youtube_api_key: secret("YOUTUBE_API_KEY"),
            reddit,
            tmdb_api_key: secret("TMDB_API_KEY"),
            adzuna,
        }
    }
}

fn secret(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.starts_with("your_") {
        return None;
    }
    Some(trimmed.to_owned())
}

fn parse_bind(raw: Option<&str>) -> SocketAddr {
    let fallback = || {
        DEFAULT_BIND
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080)))
    };
    match raw {
        Some(value) => value.parse().unwrap_or_else(|error| {
            warn!(value, %error, "invalid BIND_ADDR, using default");
            fallback()
        }),
        None => fallback(),
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let (min, max) = TIMEOUT_RANGE_SECONDS;
    let seconds = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
        .clamp(min, max);
    Duration::from_secs(seconds)
}

fn parse_seed(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse().ok())
}

fn split_keys(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.starts_with("your_"))
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}
