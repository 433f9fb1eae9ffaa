//! Reqwest-backed market source adapter for the CoinGecko API.
//!
//! The markets endpoint needs no credentials.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{get_json, AdapterBuildError};
use crate::domain::ports::{MarketSource, RawCoin, UpstreamFailure};

const DEFAULT_BASE: &str = "https://api.coingecko.com/api/v3/";

pub struct CoinGeckoMarketSource {
    client: Client,
    base: Url,
}

impl CoinGeckoMarketSource {
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
impl MarketSource for CoinGeckoMarketSource {
    async fn top_coins(&self, limit: usize) -> Result<Vec<RawCoin>, UpstreamFailure> {
        let mut url = self
            .base
            .join("coins/markets")
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        url.query_pairs_mut()
            .append_pair("vs_currency", "usd")
            .append_pair("order", "market_cap_desc")
            .append_pair("per_page", &limit.to_string())
            .append_pair("page", "1");

        let rows: Vec<CoinDto> = get_json(&self.client, url).await?;
        Ok(rows.into_iter().map(CoinDto::into_raw).collect())
    }
}

#[derive(Debug, Deserialize)]
struct CoinDto {
    id: Option<String>,
    symbol: Option<String>,
    name: Option<String>,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    market_cap: Option<f64>,
    total_volume: Option<f64>,
    market_cap_rank: Option<u32>,
    image: Option<String>,
}

impl CoinDto {
    fn into_raw(self) -> RawCoin {
        RawCoin {
            id: self.id,
            symbol: self.symbol,
            name: self.name,
            price_usd: self.current_price,
            change_24h_pct: self.price_change_percentage_24h,
            market_cap_usd: self.market_cap,
            volume_24h_usd: self.total_volume,
            rank: self.market_cap_rank,
            image_url: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_market_row() {
        let payload = serde_json::json!([{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 43_250.5,
            "price_change_percentage_24h": 2.34,
            "market_cap": 846_000_000_000.0,
            "total_volume": 24_000_000_000.0,
            "market_cap_rank": 1,
            "image": "https://example.com/btc.png"
        }]);
        let rows: Vec<CoinDto> = serde_json::from_value(payload).expect("parse");
        let raw = rows.into_iter().next().expect("row").into_raw();
        assert_eq!(raw.id.as_deref(), Some("bitcoin"));
        assert_eq!(raw.rank, Some(1));
        assert_eq!(raw.volume_24h_usd, Some(24_000_000_000.0));
    }

    #[test]
    fn null_change_is_tolerated() {
        let payload = serde_json::json!([{
            "id": "newcoin",
            "price_change_percentage_24h": null
        }]);
        let rows: Vec<CoinDto> = serde_json::from_value(payload).expect("parse");
        assert_eq!(rows[0].price_change_percentage_24h, None);
    }
}
